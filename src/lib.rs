//! racegen library root.
//! Exposes the CLI parser, the high-level run() function and the pipelines
//! behind each subcommand.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Generate { .. } => cli::commands::generate::handle(&cli.command, cfg),
        Commands::FetchImages { .. } => cli::commands::fetch::handle(&cli.command, cfg),
        Commands::Reorder { .. } => cli::commands::reorder::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    // init writes the file, so it must not fail on a broken existing one
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(&config_path)?,
    };

    dispatch(&cli, &cfg, &config_path)
}
