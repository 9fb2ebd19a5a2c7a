//! Pack command implementation

use std::path::Path;

use colored::Colorize;

use surgeon_pack::pack_dir;

use crate::error::Result;

pub fn run_pack(dir: &Path, archive: &Path) -> Result<()> {
    println!("Creating {}...", archive.display());

    let summary = pack_dir(dir, archive, |entry| {
        println!("  + {entry}");
    })?;

    println!();
    println!("{} {} entries", "packed".green().bold(), summary.entries);
    println!("Archive: {}", archive.display());
    println!("Size: {:.2} MiB", summary.archive_mib());
    Ok(())
}
