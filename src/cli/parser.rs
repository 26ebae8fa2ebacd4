use clap::{Parser, Subcommand};

/// Command-line interface definition for racegen
/// Data-preparation tool for the race tracker page
#[derive(Parser)]
#[command(
    name = "racegen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn the race metadata CSV into races.js, download race images and reorder the sheet",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,
    },

    /// Generate races.js from the race metadata CSV
    Generate {
        #[arg(long, value_name = "CSV", help = "Race metadata CSV (default from config)")]
        input: Option<String>,

        #[arg(long, value_name = "FILE", help = "Output script (default from config)")]
        output: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            conflicts_with = "no_debug",
            help = "Where to dump raw/normalized samples of the first rows"
        )]
        debug: Option<String>,

        #[arg(long = "no-debug", help = "Skip the diagnostic sample dump")]
        no_debug: bool,
    },

    /// Download race images referenced by the CSV
    FetchImages {
        #[arg(long, value_name = "CSV", help = "Race metadata CSV (default from config)")]
        input: Option<String>,

        #[arg(long, value_name = "DIR", help = "Target folder for images")]
        dir: Option<String>,

        #[arg(long = "delay-ms", value_name = "MS", help = "Pause between downloads")]
        delay_ms: Option<u64>,
    },

    /// Reorder the complete CSV following a reference CSV
    Reorder {
        #[arg(long, value_name = "CSV", help = "Reference CSV giving the order")]
        sorted: Option<String>,

        #[arg(long, value_name = "CSV", help = "CSV whose rows are reordered")]
        complete: Option<String>,

        #[arg(long, value_name = "CSV", help = "Output CSV path")]
        output: Option<String>,

        #[arg(long, short = 'v', help = "Print match statistics")]
        verbose: bool,
    },
}
