use log::{debug, error};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{IoContext, ManagerError};
use crate::utils::download::Transport;

/// One release entry of `index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionDescriptor {
    #[serde(deserialize_with = "strip_v_prefix")]
    pub version: String,
    pub date: String,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub npm: Option<String>,
    #[serde(default)]
    pub v8: Option<String>,
    #[serde(default)]
    pub uv: Option<String>,
    #[serde(default)]
    pub zlib: Option<String>,
    #[serde(default)]
    pub openssl: Option<String>,
    #[serde(default)]
    pub modules: Option<String>,
    /// Codename of the LTS line, `None` for current releases.
    #[serde(default, deserialize_with = "lts_codename")]
    pub lts: Option<String>,
    #[serde(default)]
    pub security: bool,
}

impl VersionDescriptor {
    pub fn is_lts(&self) -> bool {
        self.lts.is_some()
    }
}

fn strip_v_prefix<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.strip_prefix('v').unwrap_or(&raw).to_string())
}

// The index uses `false` for non-LTS releases and the codename otherwise.
fn lts_codename<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(name)) if !name.is_empty() => Some(name),
        _ => None,
    })
}

pub fn parse_catalog(content: &str) -> Result<Vec<VersionDescriptor>, ManagerError> {
    serde_json::from_str(content).map_err(|e| ManagerError::Parse {
        details: e.to_string(),
    })
}

/// First entry carrying an LTS codename, in the order given.
pub fn first_lts(descriptors: &[VersionDescriptor]) -> Option<&VersionDescriptor> {
    descriptors.iter().find(|d| d.is_lts())
}

/// The remote release index. Every fetch goes to the network again.
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    url: String,
    cache_path: PathBuf,
}

impl RemoteCatalog {
    pub fn new(config: &Config) -> Self {
        Self {
            url: config.catalog_url(),
            cache_path: config.catalog_cache_path(),
        }
    }

    pub fn try_fetch(&self, transport: &dyn Transport) -> Result<Vec<VersionDescriptor>, ManagerError> {
        debug!("Fetching version catalog from {}", self.url);
        transport.download(&self.url, &self.cache_path)?;

        let content = fs::read_to_string(&self.cache_path).at(&self.cache_path)?;
        let descriptors = parse_catalog(&content)?;

        debug!("Catalog lists {} versions", descriptors.len());
        Ok(descriptors)
    }

    /// Like `try_fetch` but logs the failure and returns an empty list.
    /// An empty result means "unknown", not "nothing available".
    pub fn fetch(&self, transport: &dyn Transport) -> Vec<VersionDescriptor> {
        match self.try_fetch(transport) {
            Ok(descriptors) => descriptors,
            Err(e) => {
                error!("Could not fetch available versions: {}", e);
                Vec::new()
            }
        }
    }
}
