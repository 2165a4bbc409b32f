use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{IoContext, ManagerError};

/// The active version: a one-line marker file plus its in-memory copy.
#[derive(Debug)]
pub struct ActivationState {
    marker_path: PathBuf,
    current: Option<String>,
}

impl ActivationState {
    pub fn load(marker_path: impl Into<PathBuf>) -> Result<Self, ManagerError> {
        let marker_path = marker_path.into();
        let current = read_marker(&marker_path).at(&marker_path)?;
        debug!("Active version from marker: {:?}", current);

        Ok(Self {
            marker_path,
            current,
        })
    }

    pub fn get(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Overwrites the marker. Whether `version` is installed is the
    /// caller's concern.
    pub fn set(&mut self, version: &str) -> Result<(), ManagerError> {
        fs::write(&self.marker_path, version).at(&self.marker_path)?;
        self.current = Some(version.to_string());
        Ok(())
    }
}

fn read_marker(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let version = content.trim();
            Ok((!version.is_empty()).then(|| version.to_string()))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
