//! Error type shared by loaders, the registry and the resource manager.

use thiserror::Error;

/// Errors raised while registering loaders or resolving resources.
///
/// `NotFound` is the only variant a loader may return to mean "try the next
/// loader"; every other variant stops a lookup.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("resource not found: {0}")]
    NotFound(String),

    /// An `add_search_path` call named a loader id that is not registered.
    #[error("unknown resource loader: {0}")]
    UnknownLoader(String),

    #[error("duplicate resource loader id: {0}")]
    DuplicateLoader(String),

    #[error("failed to load resource '{name}': {source}")]
    LoadFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl ResourceError {
    /// True for the per-loader miss that drives fallback to the next loader.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResourceError::NotFound(_))
    }
}
