//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Terminal viewer for the finance department's process taxonomy
#[derive(Parser, Debug)]
#[command(name = "fintree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (repeat for more verbosity)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Use ASCII expand/collapse indicators
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the taxonomy tree (default)
    Show {
        /// Collapse a section before rendering (repeatable; unknown keys are ignored)
        #[arg(short, long = "collapse", value_name = "KEY")]
        collapse: Vec<String>,
    },

    /// Browse the taxonomy interactively (arrows move, space toggles, q quits)
    Browse,

    /// Print section and process counts
    Summary,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config path
    Path,
}
