//! CLI layer: argument parsing, command dispatch and terminal interaction

pub mod args;
pub mod browse;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};
