//! License resource manager: ordered loader search that keeps the program's
//! own bundled resources out of license lookups.
//!
//! A license header named by the user must come from a location the user
//! controls. Bundled loaders are therefore skipped for every name except
//! [`DEFAULT_HEADER`], which may still fall through to the bundled copy.

use crate::error::ResourceError;
use crate::loader::ResourceLoader;
use crate::registry::LoaderRegistry;
use crate::resource::Resource;
use crate::DEFAULT_HEADER;

#[derive(Debug, Default)]
pub struct LicenseResourceManager {
    loaders: LoaderRegistry,
}

impl LicenseResourceManager {
    pub fn new(loaders: LoaderRegistry) -> Self {
        Self { loaders }
    }

    pub fn loaders(&self) -> &LoaderRegistry {
        &self.loaders
    }

    /// Forward `path` to the loader registered as `id`.
    pub fn add_search_path(&mut self, id: &str, path: &str) -> Result<(), ResourceError> {
        let loader = self
            .loaders
            .get_mut(id)
            .ok_or_else(|| ResourceError::UnknownLoader(id.to_string()))?;
        loader.add_search_path(path);
        Ok(())
    }

    /// Resolve `name` against the loaders in registration order; first hit wins.
    pub fn get_resource(&self, name: &str) -> Result<Resource, ResourceError> {
        for (id, loader) in self.loaders.iter() {
            if skip_loader(loader, name) {
                tracing::trace!("skipping bundled loader '{}' for '{}'", id, name);
                continue;
            }

            match loader.get_resource(name) {
                Ok(resource) => {
                    tracing::debug!(
                        "The resource '{}' was found as {}.",
                        name,
                        resource.name()
                    );
                    return Ok(resource);
                }
                Err(e) if e.is_not_found() => {
                    tracing::debug!(
                        "The resource '{}' was not found with resource loader '{}' ({}).",
                        name,
                        id,
                        loader.kind()
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(ResourceError::NotFound(name.to_string()))
    }
}

fn skip_loader(loader: &dyn ResourceLoader, name: &str) -> bool {
    loader.is_host_bundled() && name != DEFAULT_HEADER
}
