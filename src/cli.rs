//! Command-line layer: clap definitions and one thin handler per subcommand.

pub mod commands;
pub mod parser;
