//! Repair command implementation
//!
//! Mojibake repair: decode with fallback, undo one bad encoding round
//! trip, write as UTF-8. With --output the corrupted input is kept, the
//! way the .bak-to-cleaned script worked.

use std::path::Path;

use colored::Colorize;

use surgeon_fs::{read_text, repair_mojibake, write_atomic};

use crate::error::Result;

pub fn run_repair(input: &Path, output: Option<&Path>) -> Result<()> {
    let (text, decoding) = read_text(input)?;
    println!("decoded {} as {:?}", input.display(), decoding);

    let repaired = repair_mojibake(&text);
    if repaired == text {
        println!("{} nothing to repair", "note".yellow().bold());
    }

    let destination = output.unwrap_or(input);
    write_atomic(destination, repaired.as_bytes())?;
    println!("{} {}", "written".green().bold(), destination.display());
    Ok(())
}
