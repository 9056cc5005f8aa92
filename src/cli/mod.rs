//! CLI argument parsing for gradetab
//!
//! Uses clap for argument parsing. Global flags: --root, --user, --format,
//! --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod output;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AddArgs, EditArgs};
pub use output::OutputFormat;

/// Gradetab - per-class grade tracking for a single user
#[derive(Parser, Debug)]
#[command(name = "gradetab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for grade files and configuration
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// User name the grade file is keyed by
    #[arg(long, short, global = true, env = "GRADETAB_USER")]
    pub user: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List classes with their averages
    List,

    /// Show one class record
    Show {
        /// Class name (case-sensitive)
        class: String,
    },

    /// Add a class to the user's roster
    Add(AddArgs),

    /// Replace a class's grade lists (weights are kept)
    Edit(EditArgs),

    /// Delete a class, with confirmation and single-step undo
    Delete {
        /// Class name (case-sensitive)
        class: String,

        /// Skip the confirmation and undo prompts
        #[arg(long, short)]
        yes: bool,
    },

    /// Interactive session reading commands from stdin
    Shell,
}
