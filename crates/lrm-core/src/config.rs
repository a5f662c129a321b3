use crate::error::ResourceError;
use crate::loader::{BundledResourceLoader, FileResourceLoader, ResourceLoader};
use crate::manager::LicenseResourceManager;
use crate::registry::LoaderRegistry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Which loader implementation a `[[loaders]]` entry builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderKind {
    /// Files under `search_paths` (and absolute paths).
    File,
    /// Resources compiled into the program, including the default header.
    Bundled,
}

/// One `[[loaders]]` entry. Entries are searched in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub id: String,
    pub kind: LoaderKind,
    /// Initial search paths handed to the loader's `add_search_path`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_paths: Vec<String>,
}

impl LoaderConfig {
    fn build(&self) -> Box<dyn ResourceLoader> {
        let mut loader: Box<dyn ResourceLoader> = match self.kind {
            LoaderKind::File => Box::new(FileResourceLoader::new()),
            LoaderKind::Bundled => Box::new(BundledResourceLoader::with_defaults()),
        };
        for path in &self.search_paths {
            loader.add_search_path(path);
        }
        loader
    }
}

/// Global configuration loaded from `~/.config/lrm/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LrmConfig {
    #[serde(default)]
    pub loaders: Vec<LoaderConfig>,
}

impl Default for LrmConfig {
    fn default() -> Self {
        Self {
            loaders: vec![
                LoaderConfig {
                    id: "file".to_string(),
                    kind: LoaderKind::File,
                    search_paths: vec![".".to_string()],
                },
                LoaderConfig {
                    id: "classpath".to_string(),
                    kind: LoaderKind::Bundled,
                    search_paths: Vec::new(),
                },
            ],
        }
    }
}

impl LrmConfig {
    /// Build a manager whose loaders follow the order of `loaders`.
    pub fn build_manager(&self) -> Result<LicenseResourceManager, ResourceError> {
        let mut registry = LoaderRegistry::new();
        for entry in &self.loaders {
            registry.register(entry.id.clone(), entry.build())?;
        }
        Ok(LicenseResourceManager::new(registry))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("lrm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LrmConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LrmConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<LrmConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: LrmConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
