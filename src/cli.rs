//! CLI argument parsing for evalcheck
//!
//! Uses clap for argument parsing. Global flags: --root, --format,
//! --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use crate::format::OutputFormat;

/// Evalcheck - consistency checker for rubric/benchmark/prompt configs
#[derive(Parser, Debug)]
#[command(name = "evalcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Root directory of the evaluation config tree
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
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
    /// Run the full rubric/benchmark/prompt consistency check
    Check {
        /// Write the report to a file instead of stdout
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Check benchmark inclusion/exclusion criteria format
    Criteria,

    /// Check judge prompt structural sections
    Prompts {
        /// Check a single file (relative to the root)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Flag prompts with possible compound AND/OR logic (informational)
    Logic,
}

// Implement ValueEnum for OutputFormat to work with clap
impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[OutputFormat::Human, OutputFormat::Json]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            OutputFormat::Human => Some(clap::builder::PossibleValue::new("human")),
            OutputFormat::Json => Some(clap::builder::PossibleValue::new("json")),
        }
    }
}
