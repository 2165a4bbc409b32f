//! Install, switch between and remove Node.js versions.
//!
//! `VersionManager` ties together the remote catalog, the on-disk install
//! store and the persisted active-version marker.

pub mod activation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod manager;
pub mod path_env;
pub mod platform;
pub mod store;
pub mod utils;

pub use activation::ActivationState;
pub use catalog::{RemoteCatalog, VersionDescriptor};
pub use config::Config;
pub use error::ManagerError;
pub use manager::{Activation, InstallOutcome, InstallRequest, VersionManager};
pub use path_env::{ManagedPathMatcher, ManagedRuntimePattern, ProcessSearchPath, SearchPath};
pub use platform::{Arch, Os, Platform};
pub use store::InstallStore;
pub use utils::download::{HttpTransport, Transport};
