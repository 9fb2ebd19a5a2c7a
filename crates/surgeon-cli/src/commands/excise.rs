//! Excise command implementation
//!
//! Reads the target file once, applies the plan's edit batch to the
//! in-memory buffer, and writes back atomically. Region-not-found is
//! surfaced per edit; the default policy is all-or-nothing.

use std::path::Path;

use colored::Colorize;
use similar::TextDiff;

use surgeon_fs::{read_text, write_atomic};
use surgeon_text::EditPlan;

use crate::error::{CliError, Result};

pub fn run_excise(file: &Path, plan: &Path, dry_run: bool, allow_partial: bool) -> Result<()> {
    let (plan_text, _) = read_text(plan)?;
    let batch = EditPlan::from_toml(&plan_text)?.into_batch()?;

    let (original, decoding) = read_text(file)?;
    tracing::debug!(path = %file.display(), ?decoding, edits = batch.edits.len(), "loaded target");

    let outcome = batch.apply(&original);

    for applied in &outcome.applied {
        println!(
            "{} {} (lines {}-{}, marker #{})",
            "replaced".green().bold(),
            applied.name,
            applied.lines.start + 1,
            applied.lines.end,
            applied.start_candidate
        );
    }
    for missed in &outcome.missed {
        println!("{} {}: {}", "not found".yellow().bold(), missed.name, missed.error);
    }

    if outcome.is_noop() {
        println!("No regions matched; file left unchanged.");
        return Ok(());
    }

    if !outcome.is_complete() && !allow_partial {
        return Err(CliError::user(format!(
            "{} of {} edits found no region; aborting without writing (use --allow-partial to override)",
            outcome.missed.len(),
            batch.edits.len()
        )));
    }

    if dry_run {
        let diff = TextDiff::from_lines(&original, &outcome.buffer);
        print!(
            "{}",
            diff.unified_diff()
                .header(&file.display().to_string(), "excised")
        );
        return Ok(());
    }

    write_atomic(file, outcome.buffer.as_bytes())?;
    println!(
        "{} {} ({} -> {} lines)",
        "wrote".green().bold(),
        file.display(),
        original.lines().count(),
        outcome.buffer.lines().count()
    );
    Ok(())
}
