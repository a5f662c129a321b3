//! Core of `lrm`: resolve license header resources from an ordered set of
//! resource loaders.

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod manager;
pub mod registry;
pub mod resource;

pub use error::ResourceError;
pub use loader::{BundledResourceLoader, FileResourceLoader, ResourceLoader};
pub use manager::LicenseResourceManager;
pub use registry::LoaderRegistry;
pub use resource::Resource;

/// The one resource name bundled loaders are allowed to serve.
pub const DEFAULT_HEADER: &str = "config/maven-header.txt";
