//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Source Surgeon - textual surgery on generated source files
#[derive(Parser, Debug)]
#[command(name = "surgeon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Apply a TOML edit plan to a file
    ///
    /// Locates each region by its marker chain, excises it, and splices
    /// in the plan's replacement snippet. Without --allow-partial, any
    /// region that cannot be found aborts the run before writing.
    Excise {
        /// File to operate on
        file: PathBuf,

        /// Edit plan (TOML)
        #[arg(short, long)]
        plan: PathBuf,

        /// Print a unified diff instead of writing
        #[arg(long)]
        dry_run: bool,

        /// Write even when some edits found no region
        #[arg(long)]
        allow_partial: bool,
    },

    /// Regex-replace across a list of files
    ///
    /// Example:
    ///   surgeon rename --pattern '\.withOpacity\(([^)]+)\)' \
    ///     --replace '.withValues(alpha: $1)' lib/**/*.dart
    Rename {
        /// Regex to match
        #[arg(short, long)]
        pattern: String,

        /// Replacement template ($1-style captures)
        #[arg(short, long)]
        replace: String,

        /// Files to rewrite
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Repair a mojibake-corrupted file
    ///
    /// Decodes with a Latin-1 fallback, undoes one UTF-8-read-as-Latin-1
    /// round trip, and writes the result as UTF-8.
    Repair {
        /// Corrupted input file
        input: PathBuf,

        /// Write here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Zip a directory tree into a release archive
    Pack {
        /// Directory to package
        dir: PathBuf,

        /// Output archive path
        archive: PathBuf,
    },
}
