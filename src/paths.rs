//! Centralized path definitions for tingen
//!
//! ```text
//! ~/.config/tingen/
//! └── config.toml               # Generation defaults
//! ```
//!
//! The base directory follows the platform convention reported by `dirs`
//! (`$XDG_CONFIG_HOME` on Linux), falling back to `~/.config`.

use std::path::PathBuf;

/// Config directory name below the platform config dir
const CONFIG_DIR: &str = "tingen";

/// Global config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the tingen config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(CONFIG_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
