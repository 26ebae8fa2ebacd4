use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reorder::ReorderLogic;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reorder {
        sorted,
        complete,
        output,
        verbose,
    } = cmd
    {
        let sorted = sorted.as_deref().unwrap_or(&cfg.sorted_path);
        let complete = complete.as_deref().unwrap_or(&cfg.csv_path);
        let output = output.as_deref().unwrap_or(&cfg.sorted_output_path);

        ReorderLogic::run(
            Path::new(sorted),
            Path::new(complete),
            Path::new(output),
            *verbose,
        )?;
    }

    Ok(())
}
