use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    #[error("Network error fetching {url}: {details}")]
    Network { url: String, details: String },

    #[error("Failed to parse version catalog: {details}")]
    Parse { details: String },

    #[error("Node.js {version} is not installed. Install it first with 'node-shift install {version}'")]
    NotInstalled { version: String },

    #[error("Cannot uninstall Node.js {version} because it is the active version. Switch to another version first")]
    ActiveVersion { version: String },

    #[error("No LTS release found in the version catalog")]
    NoLtsFound,

    #[error("The version catalog is empty or could not be fetched")]
    EmptyCatalog,

    #[error("Invalid version format: {input}")]
    InvalidVersion { input: String },

    #[error("IO error ({kind}) at {}: {message}", path.display())]
    Filesystem {
        path: PathBuf,
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error("Failed to extract archive: {details}")]
    Extract { details: String },

    #[error("Cannot rewrite search path: {details}")]
    SearchPath { details: String },

    #[error("Could not determine the home directory")]
    HomeDirUnavailable,
}

impl ManagerError {
    pub fn network(url: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self::Network {
            url: url.into(),
            details: error.to_string(),
        }
    }

    pub fn filesystem(path: &Path, err: &std::io::Error) -> Self {
        Self::Filesystem {
            path: path.to_path_buf(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    pub fn extract(error: impl std::fmt::Display) -> Self {
        Self::Extract {
            details: error.to_string(),
        }
    }

    /// Soft conditions are refusals that leave the filesystem untouched.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            Self::NotInstalled { .. } | Self::ActiveVersion { .. } | Self::NoLtsFound
        )
    }
}

/// Attaches the offending path to an `io::Result`.
pub trait IoContext<T> {
    fn at(self, path: &Path) -> Result<T, ManagerError>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn at(self, path: &Path) -> Result<T, ManagerError> {
        self.map_err(|err| ManagerError::filesystem(path, &err))
    }
}
