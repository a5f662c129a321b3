//! Ordered registry of named resource loaders.
//!
//! Registration order is lookup order, so the registry is a plain list of
//! `(id, loader)` pairs rather than a hash map.

use crate::error::ResourceError;
use crate::loader::ResourceLoader;

#[derive(Debug, Default)]
pub struct LoaderRegistry {
    loaders: Vec<(String, Box<dyn ResourceLoader>)>,
}

impl LoaderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a loader under `id`. Ids are unique.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        loader: Box<dyn ResourceLoader>,
    ) -> Result<(), ResourceError> {
        let id = id.into();
        if self.get(&id).is_some() {
            return Err(ResourceError::DuplicateLoader(id));
        }
        self.loaders.push((id, loader));
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(
        mut self,
        id: impl Into<String>,
        loader: impl ResourceLoader + 'static,
    ) -> Result<Self, ResourceError> {
        self.register(id, Box::new(loader))?;
        Ok(self)
    }

    /// Loader registered as `id`.
    pub fn get(&self, id: &str) -> Option<&(dyn ResourceLoader + 'static)> {
        self.loaders
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, l)| l.as_ref())
    }

    /// Mutable access to the loader registered as `id`.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut (dyn ResourceLoader + 'static)> {
        self.loaders
            .iter_mut()
            .find(|(k, _)| k == id)
            .map(|(_, l)| l.as_mut())
    }

    /// Loaders in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &(dyn ResourceLoader + 'static))> {
        self.loaders.iter().map(|(k, l)| (k.as_str(), l.as_ref()))
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.loaders.iter().map(|(k, _)| k.as_str())
    }

    /// Number of registered loaders.
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{BundledResourceLoader, FileResourceLoader};

    #[test]
    fn registry_keeps_registration_order() {
        let reg = LoaderRegistry::new()
            .with("zeta", FileResourceLoader::new())
            .unwrap()
            .with("alpha", BundledResourceLoader::new())
            .unwrap()
            .with("mid", FileResourceLoader::new())
            .unwrap();
        assert_eq!(reg.ids().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn registry_rejects_duplicate_ids() {
        let mut reg = LoaderRegistry::new();
        reg.register("file", Box::new(FileResourceLoader::new()))
            .unwrap();
        let err = reg
            .register("file", Box::new(BundledResourceLoader::new()))
            .unwrap_err();
        assert!(matches!(err, ResourceError::DuplicateLoader(id) if id == "file"));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("file").unwrap().kind(), "file");
    }

    #[test]
    fn registry_lookup_by_id() {
        let mut reg = LoaderRegistry::new()
            .with("classpath", BundledResourceLoader::new())
            .unwrap();
        assert!(reg.get("classpath").unwrap().is_host_bundled());
        assert!(reg.get("missing").is_none());
        assert!(reg.get_mut("classpath").is_some());
        assert!(reg.get_mut("missing").is_none());
        assert!(!reg.is_empty());
    }
}
