use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        let origin = if config_path.exists() {
            config_path.display().to_string()
        } else {
            format!("{} (not found, defaults)", config_path.display())
        };
        println!("📄 Current configuration: {}\n", origin);
        println!("{}", serde_yaml::to_string(cfg)?);
    }

    Ok(())
}
