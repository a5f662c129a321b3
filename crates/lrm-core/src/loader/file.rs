//! Filesystem loader searching an ordered list of directories.

use super::ResourceLoader;
use crate::error::ResourceError;
use crate::resource::Resource;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Loads resources from files under the configured search directories.
///
/// Relative names are tried against each search directory in the order the
/// directories were added. An absolute name is accepted as-is when it points
/// at a readable file. A candidate that exists but cannot be read is a miss,
/// so the search moves on. Relative names with `..` components are never joined
/// onto a search directory.
#[derive(Debug, Default)]
pub struct FileResourceLoader {
    search_paths: Vec<PathBuf>,
}

impl FileResourceLoader {
    /// A loader with no search directories; only absolute names resolve.
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader searching `paths` in the given order.
    pub fn with_search_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut loader = Self::new();
        for p in paths {
            loader.push_dir(p.as_ref());
        }
        loader
    }

    /// Search directories in lookup order.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    fn push_dir(&mut self, dir: &Path) {
        if !self.search_paths.iter().any(|p| p == dir) {
            self.search_paths.push(dir.to_path_buf());
        }
    }

    /// Read a candidate file. Any read failure counts as a miss.
    fn try_read(path: &Path) -> Option<Resource> {
        match fs::read(path) {
            Ok(content) => Some(Resource::new(path.display().to_string(), content)),
            Err(e) => {
                tracing::debug!("skipping unreadable {}: {}", path.display(), e);
                None
            }
        }
    }
}

fn escapes_base(path: &Path) -> bool {
    path.components().any(|c| matches!(c, Component::ParentDir))
}

impl ResourceLoader for FileResourceLoader {
    fn get_resource(&self, name: &str) -> Result<Resource, ResourceError> {
        let requested = Path::new(name);

        if requested.is_absolute() {
            if requested.is_file() {
                if let Some(res) = Self::try_read(requested) {
                    return Ok(res);
                }
            }
            return Err(ResourceError::NotFound(name.to_string()));
        }

        if escapes_base(requested) {
            tracing::debug!("refusing to join '{}' onto search paths", name);
            return Err(ResourceError::NotFound(name.to_string()));
        }

        for dir in &self.search_paths {
            let candidate = dir.join(requested);
            if candidate.is_file() {
                if let Some(res) = Self::try_read(&candidate) {
                    return Ok(res);
                }
            }
        }

        Err(ResourceError::NotFound(name.to_string()))
    }

    fn add_search_path(&mut self, path: &str) {
        self.push_dir(Path::new(path));
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}
