//! Configuration Management
//!
//! Handles persistent configuration storage for tshelf.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Catalog file used when no --catalog flag is given
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Let next/prev wrap past the last and first page
    #[serde(default)]
    pub wrap_navigation: bool,
    /// Title of the last focused shelf
    #[serde(default)]
    pub last_shelf: Option<String>,
    /// Theme name (built-in or skins/<name>.yaml)
    #[serde(default)]
    pub theme: Option<String>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tshelf").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get effective catalog path (CLI > config > built-in)
    pub fn effective_catalog(&self, cli: Option<&Path>) -> Option<PathBuf> {
        cli.map(Path::to_path_buf).or_else(|| self.catalog_path.clone())
    }

    /// Get effective wrap setting (CLI flag forces it on)
    pub fn effective_wrap(&self, cli: bool) -> bool {
        cli || self.wrap_navigation
    }

    /// Get effective initial shelf (CLI > last focused)
    pub fn effective_shelf(&self, cli: Option<&str>) -> Option<String> {
        cli.map(str::to_string).or_else(|| self.last_shelf.clone())
    }

    /// Remember the focused shelf and save
    pub fn set_last_shelf(&mut self, title: &str) -> Result<()> {
        self.last_shelf = Some(title.to_string());
        self.save()
    }
}
