use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::fetch::{FetchLogic, FetchOptions, HttpImageSource};
use crate::errors::AppResult;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::FetchImages {
        input,
        dir,
        delay_ms,
    } = cmd
    {
        let input = input.as_deref().unwrap_or(&cfg.csv_path);
        let opts = FetchOptions {
            dir: PathBuf::from(dir.as_deref().unwrap_or(&cfg.image_dir)),
            delay: Duration::from_millis(delay_ms.unwrap_or(cfg.fetch_delay_ms)),
        };

        let source = HttpImageSource::new(Duration::from_secs(cfg.fetch_timeout_secs))?;
        FetchLogic::run(Path::new(input), &opts, &source)?;
    }

    Ok(())
}
