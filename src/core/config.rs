//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::catalog::{Catalog, CatalogError};

/// Environment variable naming a catalog file
pub const CATALOG_ENV: &str = "CHILDFIT_CATALOG";

/// Environment variable naming the default output format
pub const FORMAT_ENV: &str = "CHILDFIT_FORMAT";

/// childfit configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file to use instead of the built-in sample catalog
    pub catalog: Option<PathBuf>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Global user config (~/.config/childfit/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 2. Environment variables
        config.merge(Self::from_env(|key| std::env::var(key).ok()));

        config
    }

    /// Path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "childfit")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    fn read_file(path: &Path) -> Option<Config> {
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config file");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
                None
            }
        }
    }

    fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Config {
        Config {
            catalog: lookup(CATALOG_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            default_format: lookup(FORMAT_ENV).filter(|v| !v.is_empty()),
        }
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.catalog.is_some() {
            self.catalog = other.catalog;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Build the catalog this configuration points at
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::sample()),
        }
    }
}
