//! Resource loaders: the sources a resource manager searches.
//!
//! The manager only depends on the [`ResourceLoader`] trait. Concrete
//! loaders live in submodules.

mod bundled;
mod file;

pub use bundled::BundledResourceLoader;
pub use file::FileResourceLoader;

use crate::error::ResourceError;
use crate::resource::Resource;
use std::fmt::Debug;

/// A source that can resolve resource names.
pub trait ResourceLoader: Debug {
    /// Resolve `name` to a resource.
    ///
    /// Return `ResourceError::NotFound` when this loader does not have the
    /// resource; any other error aborts the caller's search.
    fn get_resource(&self, name: &str) -> Result<Resource, ResourceError>;

    /// Add a loader-specific search location (a directory, a key prefix, ...).
    fn add_search_path(&mut self, path: &str);

    /// True when the loader serves the host program's own bundled resources
    /// rather than caller-specified locations.
    fn is_host_bundled(&self) -> bool {
        false
    }

    /// Short human-readable kind, used in logs and listings.
    fn kind(&self) -> &'static str;
}
