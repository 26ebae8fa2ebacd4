use crate::errors::AppResult;
use crate::ui::messages::success;

use crate::cli::parser::Commands;
use crate::config::Config;
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        Config::write_default(config_path, *force)?;
        success(format!("Config file: {}", config_path.display()));
    }

    Ok(())
}
