//! Global configuration management
//!
//! Provides persistent defaults for the command line front end.
//! Config is stored at `~/.config/tingen/config.toml` (XDG standard).
//!
//! ```toml
//! [generate]
//! test = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::TinKind;
use crate::paths;

/// Global tingen configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Generation defaults
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Generation defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Produce test TINs unless overridden on the command line
    #[serde(default)]
    pub test: bool,
}

impl GlobalConfig {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        paths::global_config_dir()
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or fall back to defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path).unwrap_or_else(|e| {
                log::warn!("ignoring config {}: {e:#}", path.display());
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Load config from an explicit path; malformed files are an error
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the mode: an explicit request wins, otherwise the configured default
    #[must_use]
    pub fn kind(&self, requested: Option<TinKind>) -> TinKind {
        requested.unwrap_or_else(|| TinKind::from(self.generate.test))
    }
}
