use regex::Regex;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use crate::error::ManagerError;

/// Decides whether a search-path entry belongs to a managed runtime
/// install and must be dropped before a new one is prepended.
pub trait ManagedPathMatcher {
    fn is_managed(&self, entry: &Path) -> bool;
}

impl<F> ManagedPathMatcher for F
where
    F: Fn(&Path) -> bool,
{
    fn is_managed(&self, entry: &Path) -> bool {
        self(entry)
    }
}

/// Matches anything under our own base directory, any runtime-manager
/// directory (`.nvm`, `.fnm`, ...) and any `node-vX.Y.Z...` component.
#[derive(Debug, Clone)]
pub struct ManagedRuntimePattern {
    base_dir: PathBuf,
    component: Regex,
}

impl ManagedRuntimePattern {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let component = Regex::new(r"(?i)^(\.?(node-shift|nvm|nvs|fnm)|node-v\d+\.\d+\.\d+.*)$")
            .expect("managed runtime pattern is valid");

        Self {
            base_dir: base_dir.into(),
            component,
        }
    }
}

impl ManagedPathMatcher for ManagedRuntimePattern {
    fn is_managed(&self, entry: &Path) -> bool {
        if entry.starts_with(&self.base_dir) {
            return true;
        }

        entry.components().any(|c| match c {
            Component::Normal(name) => name
                .to_str()
                .is_some_and(|name| self.component.is_match(name)),
            _ => false,
        })
    }
}

/// Where `use` reads and writes the executable search path.
pub trait SearchPath {
    fn get(&self) -> Option<OsString>;
    fn set(&mut self, value: &OsStr);
}

/// A variable of the running process, `PATH` unless configured otherwise.
/// Changes are visible to this process and its children only.
#[derive(Debug, Clone)]
pub struct ProcessSearchPath {
    var: String,
}

impl ProcessSearchPath {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl SearchPath for ProcessSearchPath {
    fn get(&self) -> Option<OsString> {
        env::var_os(&self.var)
    }

    fn set(&mut self, value: &OsStr) {
        env::set_var(&self.var, value);
    }
}

/// Splits `current`, drops managed entries, and puts `bin_dir` first.
/// Every other entry keeps its relative order.
pub fn rewrite_path(
    current: Option<&OsStr>,
    bin_dir: &Path,
    matcher: &dyn ManagedPathMatcher,
) -> Result<OsString, ManagerError> {
    let mut entries = vec![bin_dir.to_path_buf()];

    if let Some(current) = current.filter(|value| !value.is_empty()) {
        entries.extend(env::split_paths(current).filter(|entry| {
            entry.as_os_str().is_empty() || !matcher.is_managed(entry)
        }));
    }

    env::join_paths(entries).map_err(|e| ManagerError::SearchPath {
        details: e.to_string(),
    })
}
