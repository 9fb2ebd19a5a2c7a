//! Source Surgeon CLI
//!
//! The command-line interface for textual surgery on generated source
//! files: plan-driven region excision, regex renames, encoding repair,
//! and release packaging.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Excise {
            file,
            plan,
            dry_run,
            allow_partial,
        } => commands::run_excise(&file, &plan, dry_run, allow_partial),
        Commands::Rename {
            pattern,
            replace,
            files,
        } => commands::run_rename(&pattern, &replace, &files),
        Commands::Repair { input, output } => commands::run_repair(&input, output.as_deref()),
        Commands::Pack { dir, archive } => commands::run_pack(&dir, &archive),
    }
}
