use directories::BaseDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoContext, ManagerError};

pub const DEFAULT_DIST_URL: &str = "https://nodejs.org/dist";
pub const BASE_DIR_NAME: &str = ".node-shift";
pub const MARKER_FILE: &str = "current";
pub const CATALOG_CACHE_FILE: &str = "index.json";
pub const SETTINGS_FILE: &str = "settings.json";

const DIR_ENV: &str = "NODE_SHIFT_DIR";
const MIRROR_ENV: &str = "NODE_SHIFT_MIRROR";

/// Optional overrides read from `settings.json` in the base directory.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub mirror: Option<String>,
}

/// Everything the engine needs to know about where it lives.
/// Built once at startup and handed to the `VersionManager`.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_dir: PathBuf,
    pub dist_url: String,
    pub user_agent: String,
    /// Name of the search-path variable rewritten by `use`.
    pub path_var: String,
}

impl Config {
    /// Config rooted at `base_dir` with the built-in defaults.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            dist_url: DEFAULT_DIST_URL.to_string(),
            user_agent: default_user_agent(),
            path_var: "PATH".to_string(),
        }
    }

    /// Resolves the base directory from the home directory (or
    /// `NODE_SHIFT_DIR`), then layers `settings.json` and `NODE_SHIFT_MIRROR`.
    pub fn from_env() -> Result<Self, ManagerError> {
        let base_dir = match env::var_os(DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => BaseDirs::new()
                .ok_or(ManagerError::HomeDirUnavailable)?
                .home_dir()
                .join(BASE_DIR_NAME),
        };

        let mut config = Self::with_base_dir(base_dir);

        let settings = load_settings(&config.settings_path())?;
        if let Some(mirror) = settings.mirror {
            config.dist_url = mirror;
        }
        if let Ok(mirror) = env::var(MIRROR_ENV) {
            if !mirror.trim().is_empty() {
                config.dist_url = mirror;
            }
        }
        config.dist_url = config.dist_url.trim_end_matches('/').to_string();

        Ok(config)
    }

    pub fn with_dist_url(mut self, dist_url: impl Into<String>) -> Self {
        self.dist_url = dist_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn ensure_base_dir(&self) -> Result<(), ManagerError> {
        fs::create_dir_all(&self.base_dir).at(&self.base_dir)
    }

    pub fn version_dir(&self, version: &str) -> PathBuf {
        self.base_dir.join(version)
    }

    pub fn marker_path(&self) -> PathBuf {
        self.base_dir.join(MARKER_FILE)
    }

    pub fn catalog_cache_path(&self) -> PathBuf {
        self.base_dir.join(CATALOG_CACHE_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/{}", self.dist_url, CATALOG_CACHE_FILE)
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

pub fn load_settings(path: &Path) -> Result<Settings, ManagerError> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path).at(path)?;
    serde_json::from_str(&content).map_err(|e| ManagerError::Parse {
        details: format!("{}: {}", path.display(), e),
    })
}
