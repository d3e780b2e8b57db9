//! Command line interface definition

use clap::{Args, Parser, Subcommand};
use mediasweep_types::{ColorChoice, Disposal};
use std::path::PathBuf;

/// mediasweep - Clean up media files no record references
#[derive(Parser)]
#[command(name = "mediasweep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Clean up media files no record references")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Color output control
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Media root to scan
    #[arg(long, global = true, value_name = "DIR")]
    pub media_root: Option<PathBuf>,

    /// JSON manifest of the records' file references
    #[arg(long, global = true, value_name = "FILE")]
    pub registry: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Clean unused media files which have no reference in models
    Cleanup(CleanupArgs),

    /// Delete quarantine buckets older than the retention window
    Sweep {
        /// Report expired buckets without deleting them
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List models that own file attributes
    Models,
}

#[derive(Args)]
pub struct CleanupArgs {
    /// Show the list of possible models for the --include-models argument
    #[arg(short = 'm', long)]
    pub show_possible_models: bool,

    /// Do not ask confirmation
    #[arg(long = "noinput", visible_alias = "no-input")]
    pub no_input: bool,

    /// Exclude files by mask (only * is supported), can use multiple --exclude
    #[arg(short, long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Include only a specific list of models, can use multiple --include-models
    #[arg(short, long, value_name = "NAME")]
    pub include_models: Vec<String>,

    /// Remove empty dirs after files cleanup
    #[arg(long)]
    pub remove_empty_dirs: bool,

    /// Dry run without any affect on your data
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Delete unused files instead of placing them in quarantine
    #[arg(long)]
    pub delete: bool,

    /// Only print totals, not every file
    #[arg(short, long)]
    pub quiet: bool,
}

impl CleanupArgs {
    pub fn disposal(&self) -> Disposal {
        if self.delete {
            Disposal::Delete
        } else {
            Disposal::Quarantine
        }
    }
}
