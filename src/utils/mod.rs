pub mod download;
pub mod extract;

use regex::Regex;
use semver::Version;
use std::sync::OnceLock;

use crate::error::ManagerError;

/// Normalizes user input like `v20.11.0` to `20.11.0`.
/// Pre-release and build suffixes are rejected since they could never
/// show up as an installed version directory.
pub fn parse_version(version: &str) -> Result<String, ManagerError> {
    let trimmed = version.trim();
    let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);

    match Version::parse(bare) {
        Ok(parsed) if parsed.pre.is_empty() && parsed.build.is_empty() => Ok(parsed.to_string()),
        _ => Err(ManagerError::InvalidVersion {
            input: version.to_string(),
        }),
    }
}

/// True for names shaped exactly like `MAJOR.MINOR.PATCH`.
pub fn is_version_name(name: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("version pattern is valid"))
        .is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_version_strips_leading_v() {
        assert_eq!(parse_version("v20.11.0").unwrap(), "20.11.0");
        assert_eq!(parse_version(" 18.0.0 ").unwrap(), "18.0.0");
    }

    #[test]
    fn parse_version_rejects_partial_and_prerelease() {
        for input in ["20", "20.11", "20.11.0-rc.1", "latest", "vv20.1.0"] {
            assert!(
                matches!(parse_version(input), Err(ManagerError::InvalidVersion { .. })),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn version_names_are_strictly_numeric() {
        assert!(is_version_name("18.0.0"));
        assert!(is_version_name("20.11.1"));
        assert!(!is_version_name("v18.0.0"));
        assert!(!is_version_name("notaversion"));
        assert!(!is_version_name("18.0"));
        assert!(!is_version_name("18.0.0-nightly"));
    }
}
