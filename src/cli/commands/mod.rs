//! Command implementations

mod check_digit;
mod config;
mod generate;

use std::path::Path;

use tingen::config::GlobalConfig;

pub use check_digit::check_digit;
pub use config::config;
pub use generate::generate;

/// An explicit `--config` must parse; the default location falls back to defaults
fn load_config(path: Option<&Path>) -> anyhow::Result<GlobalConfig> {
    path.map_or_else(|| Ok(GlobalConfig::load()), GlobalConfig::load_from)
}
