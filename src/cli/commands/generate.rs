use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::generate::GenerateLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        input,
        output,
        debug,
        no_debug,
    } = cmd
    {
        let input = input.as_deref().unwrap_or(&cfg.csv_path);
        let output = output.as_deref().unwrap_or(&cfg.output_path);
        let debug = if *no_debug {
            None
        } else {
            Some(debug.as_deref().unwrap_or(&cfg.debug_path))
        };

        let summary = GenerateLogic::run(Path::new(input), Path::new(output), debug.map(Path::new))?;

        success(format!("Wrote {} races to {}", summary.count, output));
        if summary.debug_written
            && let Some(path) = debug
        {
            info(format!("Debug samples: {}", path));
        }
    }

    Ok(())
}
