pub mod config;
pub mod fetch;
pub mod generate;
pub mod init;
pub mod reorder;
