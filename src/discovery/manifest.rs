//! Catalog configuration (moncat.yaml) parsing.
//!
//! The configuration names the monster directory and how it is scanned.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MonError, Result};

/// Catalog configuration loaded from moncat.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory holding the monster files.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File extension of monster files, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Descend into subdirectories.
    #[serde(default)]
    pub recursive: bool,

    /// Load files in filename order.
    #[serde(default = "default_sort_files")]
    pub sort_files: bool,
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_extension() -> String {
    "mon".to_string()
}

fn default_sort_files() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
            recursive: false,
            sort_files: default_sort_files(),
        }
    }
}

impl CatalogConfig {
    /// Configuration for a directory with all other options at their defaults.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }

    /// Load configuration from a moncat.yaml file.
    ///
    /// A relative `directory` is resolved against the file's parent.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MonError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read configuration: {}", e),
        })?;

        let mut config = Self::parse(&content)?;
        if config.directory.is_relative() {
            if let Some(parent) = path.parent() {
                config.directory = parent.join(&config.directory);
            }
        }

        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| MonError::Config {
            message: format!("Invalid configuration: {}", e),
            help: Some("Check moncat.yaml syntax".to_string()),
        })?;

        if config.extension().is_empty() {
            return Err(MonError::Config {
                message: "`extension` must not be empty".to_string(),
                help: Some("Use `extension: mon` for standard monster files".to_string()),
            });
        }

        Ok(config)
    }

    /// The configured extension without any leading dot.
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    /// Check whether a path carries the configured extension.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.extension()))
    }
}
