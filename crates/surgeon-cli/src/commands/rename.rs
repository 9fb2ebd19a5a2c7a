//! Rename command implementation
//!
//! The bulk deprecated-API rename: one regex rewrite applied to every
//! listed file. Missing files are reported and skipped; files without a
//! match are left byte-identical.

use std::path::{Path, PathBuf};

use colored::Colorize;

use surgeon_fs::{read_text, write_atomic};
use surgeon_text::RegexRewrite;

use crate::error::Result;

pub fn run_rename(pattern: &str, replace: &str, files: &[PathBuf]) -> Result<()> {
    let rewrite = RegexRewrite::new(pattern, replace)?;

    let mut rewritten = 0;
    for file in files {
        if rename_one(&rewrite, file)? {
            rewritten += 1;
        }
    }

    println!(
        "{} {} of {} files rewritten",
        "done".green().bold(),
        rewritten,
        files.len()
    );
    Ok(())
}

fn rename_one(rewrite: &RegexRewrite, file: &Path) -> Result<bool> {
    if !file.exists() {
        println!("{} {}", "missing".yellow().bold(), file.display());
        return Ok(false);
    }

    let (content, _) = read_text(file)?;
    let result = rewrite.apply(&content);
    if result.is_unchanged() {
        tracing::debug!(path = %file.display(), "no matches");
        return Ok(false);
    }

    write_atomic(file, result.content.as_bytes())?;
    println!(
        "{} {} ({} replacements)",
        "rewrote".green().bold(),
        file.display(),
        result.replacements
    );
    Ok(true)
}
