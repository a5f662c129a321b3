//! In-memory loader for resources compiled into the program.

use super::ResourceLoader;
use crate::error::ResourceError;
use crate::resource::Resource;
use crate::DEFAULT_HEADER;
use std::collections::BTreeMap;

const DEFAULT_HEADER_TEXT: &str = include_str!("../../resources/config/maven-header.txt");

/// Serves resources bundled with the program itself.
///
/// This is the host's own "classpath": it always reports
/// [`is_host_bundled`](ResourceLoader::is_host_bundled), so a resource
/// manager only consults it for the reserved default header.
#[derive(Debug, Default)]
pub struct BundledResourceLoader {
    entries: BTreeMap<String, Vec<u8>>,
    prefixes: Vec<String>,
}

impl BundledResourceLoader {
    /// An empty loader with no bundled entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader carrying the built-in default header.
    pub fn with_defaults() -> Self {
        let mut loader = Self::new();
        loader.insert(DEFAULT_HEADER, DEFAULT_HEADER_TEXT.as_bytes().to_vec());
        loader
    }

    /// Bundle `content` under `name`; a leading `/` is dropped.
    pub fn insert(&mut self, name: impl Into<String>, content: Vec<u8>) {
        let name = name.into();
        self.entries
            .insert(name.trim_start_matches('/').to_string(), content);
    }

    /// Bundled names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn lookup(&self, key: &str) -> Option<Resource> {
        self.entries
            .get(key)
            .map(|content| Resource::new(format!("bundled:{}", key), content.clone()))
    }
}

impl ResourceLoader for BundledResourceLoader {
    fn get_resource(&self, name: &str) -> Result<Resource, ResourceError> {
        let key = name.trim_start_matches('/');

        for prefix in &self.prefixes {
            if let Some(res) = self.lookup(&format!("{}/{}", prefix, key)) {
                return Ok(res);
            }
        }

        self.lookup(key)
            .ok_or_else(|| ResourceError::NotFound(name.to_string()))
    }

    fn add_search_path(&mut self, path: &str) {
        let prefix = path.trim_matches('/').to_string();
        if !prefix.is_empty() && !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
    }

    fn is_host_bundled(&self) -> bool {
        true
    }

    fn kind(&self) -> &'static str {
        "bundled"
    }
}
