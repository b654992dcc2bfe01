//! Command dispatch logic for evalcheck

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use evalcheck_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Determine the root directory
    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if cli.verbose {
        eprintln!("resolve_root: {:?}", start.elapsed());
    }

    match &cli.command {
        Commands::Check { report } => commands::check::execute(cli, &root, report.as_deref()),
        Commands::Criteria => commands::criteria::execute(cli, &root),
        Commands::Prompts { file } => commands::prompts::execute(cli, &root, file.as_deref()),
        Commands::Logic => commands::logic::execute(cli, &root),
    }
}
