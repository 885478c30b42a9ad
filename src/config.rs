//! Application configuration management.
//!
//! The configuration is a small TOML file under the platform config
//! directory. Every command works without one; it only supplies defaults
//! for the layouts directory and the keyboard shown first.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::APP_BINARY_NAME;

/// Persistent application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing `.vil` layout files
    #[serde(default)]
    pub layouts_dir: Option<PathBuf>,
    /// Keyboard shown when the viewer starts (e.g., "elora")
    #[serde(default)]
    pub default_keyboard: Option<String>,
}

impl Config {
    /// Path to the configuration file.
    pub fn path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join(APP_BINARY_NAME).join("config.toml"))
    }

    /// Whether a configuration file exists.
    #[must_use]
    pub fn exists() -> bool {
        Self::path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Loads the configuration, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves the configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        self.save_to(&path)
    }

    /// Saves configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Layouts directory to use, falling back to the current directory.
    #[must_use]
    pub fn layouts_dir_or_cwd(&self) -> PathBuf {
        self.layouts_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
