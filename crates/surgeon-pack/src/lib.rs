//! Release packaging for Source Surgeon
//!
//! Walks a directory tree and writes a deflate-compressed zip archive
//! with entry names relative to the root. A single unreadable file
//! aborts the run; per-file errors are not swallowed.

pub mod error;

pub use error::{Error, Result};

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path};

use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

/// What a packaging run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackSummary {
    pub entries: usize,
    /// Final size of the archive on disk, in bytes.
    pub archive_bytes: u64,
}

impl PackSummary {
    /// Archive size in mebibytes, for human-readable reporting.
    pub fn archive_mib(&self) -> f64 {
        self.archive_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Zip every file under `root` into `archive`, preserving relative
/// paths as entry names. `on_entry` is called with each entry name as
/// it is added, in walk order.
pub fn pack_dir(
    root: &Path,
    archive: &Path,
    mut on_entry: impl FnMut(&str),
) -> Result<PackSummary> {
    if !root.is_dir() {
        return Err(Error::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let file = File::create(archive).map_err(|e| Error::io(archive, e))?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0;
    for step in WalkDir::new(root).sort_by_file_name() {
        let entry = step?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .expect("walkdir yields paths under root");
        let name = entry_name(relative);

        writer.start_file(name.as_str(), options)?;
        let mut input = File::open(entry.path()).map_err(|e| Error::io(entry.path(), e))?;
        io::copy(&mut input, &mut writer).map_err(|e| Error::io(entry.path(), e))?;

        tracing::info!(entry = %name, "added to archive");
        on_entry(&name);
        entries += 1;
    }

    writer.finish()?;

    let archive_bytes = fs::metadata(archive)
        .map_err(|e| Error::io(archive, e))?
        .len();
    Ok(PackSummary {
        entries,
        archive_bytes,
    })
}

/// Zip entry names always use forward slashes, whatever the host
/// separator is.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
