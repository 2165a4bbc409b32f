use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{IoContext, ManagerError};
use crate::utils::is_version_name;

/// Immediate subdirectories of `base_dir` named like `MAJOR.MINOR.PATCH`,
/// in whatever order the filesystem yields them.
pub fn scan(base_dir: &Path) -> io::Result<Vec<String>> {
    let entries = match fs::read_dir(base_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut versions = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if is_version_name(name) {
                versions.push(name.to_string());
            }
        }
    }

    Ok(versions)
}

/// The set of installed versions, always read back from disk.
#[derive(Debug)]
pub struct InstallStore {
    base_dir: PathBuf,
    installed: Vec<String>,
}

impl InstallStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            installed: Vec::new(),
        }
    }

    pub fn refresh(&mut self) -> Result<&[String], ManagerError> {
        self.installed = scan(&self.base_dir).at(&self.base_dir)?;
        debug!("Found {} installed versions", self.installed.len());
        Ok(&self.installed)
    }

    /// The set as of the last refresh.
    pub fn installed(&self) -> &[String] {
        &self.installed
    }

    pub fn list(&mut self) -> Result<Vec<String>, ManagerError> {
        self.refresh().map(<[String]>::to_vec)
    }

    pub fn exists(&self, version: &str) -> bool {
        self.version_dir(version).is_dir()
    }

    pub fn version_dir(&self, version: &str) -> PathBuf {
        self.base_dir.join(version)
    }

    /// Deletes the version directory. The installed set is refreshed even
    /// when deletion fails part way through.
    pub fn remove(&mut self, version: &str) -> Result<(), ManagerError> {
        let dir = self.version_dir(version);
        let removed = fs::remove_dir_all(&dir).at(&dir);

        if let Err(e) = self.refresh() {
            warn!("Could not rescan installed versions: {}", e);
        }

        removed
    }
}
