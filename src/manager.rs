use log::{debug, error, info, warn};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::activation::ActivationState;
use crate::catalog::{first_lts, RemoteCatalog, VersionDescriptor};
use crate::config::Config;
use crate::error::{IoContext, ManagerError};
use crate::path_env::{
    rewrite_path, ManagedPathMatcher, ManagedRuntimePattern, ProcessSearchPath, SearchPath,
};
use crate::platform::Platform;
use crate::store::InstallStore;
use crate::utils::download::{HttpTransport, Transport};
use crate::utils::{extract, parse_version};

/// What the caller asked `install` for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallRequest {
    Version(String),
    /// First LTS release in catalog order.
    Lts,
    /// First release in catalog order.
    Latest,
}

impl InstallRequest {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "lts" => Self::Lts,
            "latest" => Self::Latest,
            version => Self::Version(version.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed(String),
    AlreadyInstalled(String),
}

impl InstallOutcome {
    pub fn version(&self) -> &str {
        match self {
            Self::Installed(version) | Self::AlreadyInstalled(version) => version,
        }
    }
}

/// Result of a successful `use`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub version: String,
    pub bin_dir: PathBuf,
    /// The rewritten search path, already applied to the session.
    pub search_path: OsString,
}

pub struct VersionManager {
    config: Config,
    platform: Platform,
    transport: Box<dyn Transport>,
    matcher: Box<dyn ManagedPathMatcher>,
    search_path: Box<dyn SearchPath>,
    catalog: RemoteCatalog,
    store: InstallStore,
    activation: ActivationState,
}

impl VersionManager {
    /// Creates the base directory if needed and loads the active version.
    pub fn new(config: Config) -> Result<Self, ManagerError> {
        config.ensure_base_dir()?;

        let transport = HttpTransport::new(config.user_agent.as_str());
        let matcher = ManagedRuntimePattern::new(&config.base_dir);
        let search_path = ProcessSearchPath::new(config.path_var.as_str());
        let catalog = RemoteCatalog::new(&config);
        let store = InstallStore::new(&config.base_dir);
        let activation = ActivationState::load(config.marker_path())?;

        Ok(Self {
            config,
            platform: Platform::current(),
            transport: Box::new(transport),
            matcher: Box::new(matcher),
            search_path: Box::new(search_path),
            catalog,
            store,
            activation,
        })
    }

    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_matcher(mut self, matcher: impl ManagedPathMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    pub fn with_search_path(mut self, search_path: impl SearchPath + 'static) -> Self {
        self.search_path = Box::new(search_path);
        self
    }

    pub fn current(&self) -> Option<&str> {
        self.activation.get()
    }

    pub fn is_installed(&self, version: &str) -> bool {
        self.store.exists(version)
    }

    pub fn installed_bin_dir(&self, version: &str) -> PathBuf {
        self.platform.bin_dir(&self.config.version_dir(version))
    }

    pub fn list(&mut self) -> Result<Vec<String>, ManagerError> {
        self.store.list()
    }

    /// Catalog entries as published; empty when the fetch failed.
    pub fn list_remote(&self) -> Vec<VersionDescriptor> {
        self.catalog.fetch(self.transport.as_ref())
    }

    pub fn install(&mut self, request: InstallRequest) -> Result<InstallOutcome, ManagerError> {
        let version = self.resolve(request)?;

        if self.store.exists(&version) {
            info!("Node.js {} is already installed", version);
            return Ok(InstallOutcome::AlreadyInstalled(version));
        }

        let version_dir = self.config.version_dir(&version);
        let archive_path = self
            .config
            .base_dir
            .join(self.platform.archive_name(&version));

        info!("Installing Node.js {}", version);
        match self.download_and_unpack(&version, &version_dir, &archive_path) {
            Ok(()) => {
                info!("Installed Node.js {} into {}", version, version_dir.display());
                Ok(InstallOutcome::Installed(version))
            }
            Err(e) => {
                error!("Installing Node.js {} failed: {}", version, e);
                self.roll_back(&version_dir, &archive_path);
                Err(e)
            }
        }
    }

    /// Records `version` as the active version, then puts it first on the
    /// search path. A failed marker write leaves the search path alone.
    pub fn use_version(&mut self, version: &str) -> Result<Activation, ManagerError> {
        let version = parse_version(version)?;
        if !self.store.exists(&version) {
            return Err(ManagerError::NotInstalled { version });
        }

        let bin_dir = self.installed_bin_dir(&version);
        let current = self.search_path.get();
        let search_path = rewrite_path(current.as_deref(), &bin_dir, self.matcher.as_ref())?;

        self.activation.set(&version)?;

        self.search_path.set(&search_path);
        debug!("{} is now {:?}", self.config.path_var, search_path);
        info!("Now using Node.js {}", version);

        Ok(Activation {
            version,
            bin_dir,
            search_path,
        })
    }

    /// Refuses to remove the active version. The check is against the
    /// in-memory marker only; nothing is locked.
    pub fn uninstall(&mut self, version: &str) -> Result<(), ManagerError> {
        let version = parse_version(version)?;
        if !self.store.exists(&version) {
            return Err(ManagerError::NotInstalled { version });
        }
        if self.activation.get() == Some(version.as_str()) {
            return Err(ManagerError::ActiveVersion { version });
        }

        let removed = self.store.remove(&version);
        debug!("Installed versions now: {:?}", self.store.installed());
        removed?;
        info!("Removed Node.js {}", version);
        Ok(())
    }

    fn resolve(&self, request: InstallRequest) -> Result<String, ManagerError> {
        match request {
            InstallRequest::Version(version) => parse_version(&version),
            InstallRequest::Lts => {
                let catalog = self.catalog.try_fetch(self.transport.as_ref())?;
                let lts = first_lts(&catalog).ok_or(ManagerError::NoLtsFound)?;
                debug!("Resolved lts to {} ({:?})", lts.version, lts.lts);
                parse_version(&lts.version)
            }
            InstallRequest::Latest => {
                let catalog = self.catalog.try_fetch(self.transport.as_ref())?;
                let latest = catalog.first().ok_or(ManagerError::EmptyCatalog)?;
                debug!("Resolved latest to {}", latest.version);
                parse_version(&latest.version)
            }
        }
    }

    fn download_and_unpack(
        &mut self,
        version: &str,
        version_dir: &Path,
        archive_path: &Path,
    ) -> Result<(), ManagerError> {
        fs::create_dir_all(version_dir).at(version_dir)?;

        let url = self.platform.download_url(&self.config.dist_url, version);
        info!("Downloading {}", url);
        self.transport.download(&url, archive_path)?;

        debug!("Extracting {}", archive_path.display());
        extract::extract_archive(archive_path, version_dir)?;
        extract::flatten_single_root(version_dir)?;

        fs::remove_file(archive_path).at(archive_path)?;
        self.store.refresh()?;
        Ok(())
    }

    fn roll_back(&mut self, version_dir: &Path, archive_path: &Path) {
        if version_dir.exists() {
            if let Err(e) = fs::remove_dir_all(version_dir) {
                warn!("Could not remove {}: {}", version_dir.display(), e);
            }
        }
        if archive_path.exists() {
            if let Err(e) = fs::remove_file(archive_path) {
                warn!("Could not remove {}: {}", archive_path.display(), e);
            }
        }
        if let Err(e) = self.store.refresh() {
            warn!("Could not rescan installed versions: {}", e);
        }
    }
}
