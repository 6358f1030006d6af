//! Config command - show effective configuration

use std::path::Path;

use tingen::config::GlobalConfig;
use tingen::output::{ConfigResult, OutputMode};

/// Print the effective configuration, or only its path
pub fn config(path_only: bool, config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let path = config_path.map_or_else(GlobalConfig::config_path, Path::to_path_buf);

    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    let config = super::load_config(config_path)?;
    let result = ConfigResult {
        path: path.display().to_string(),
        exists: path.exists(),
        config,
    };
    result.render(mode);
    Ok(())
}
