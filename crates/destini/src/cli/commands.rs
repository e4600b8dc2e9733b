//! Argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Destini story tooling.
#[derive(Parser, Debug)]
#[command(name = "destini")]
#[command(about = "Validate and replay branching narrative stories")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults to ./destini.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a story file or every story file in a directory
    Validate {
        /// Story file or directory
        path: PathBuf,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = ValidationOutputFormat::Human)]
        format: ValidationOutputFormat,

        /// Only show errors, not warnings
        #[arg(short, long)]
        quiet: bool,
    },

    /// Replay a sequence of choices through a story
    Walk {
        /// Story file (the bundled hitchhiker story when omitted)
        path: Option<PathBuf>,

        /// Comma-separated option indices, e.g. `0,1`
        #[arg(long, value_delimiter = ',')]
        choices: Vec<usize>,

        /// Restart at each ending and keep consuming choices
        #[arg(long)]
        restart: bool,
    },
}

/// Output format for validation results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationOutputFormat {
    /// Human-readable report
    #[default]
    Human,
    /// Machine-readable JSON, one document per file
    Json,
}
