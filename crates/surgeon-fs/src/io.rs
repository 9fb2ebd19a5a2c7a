//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::encoding::{Decoding, decode_with_fallback};
use crate::{Error, Result};

/// Read a file and decode it, reporting which decoding was used.
///
/// Never fails on malformed text (Latin-1 accepts any byte); only I/O
/// errors surface.
pub fn read_text(path: &Path) -> Result<(String, Decoding)> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let (text, decoding) = decode_with_fallback(&bytes);
    if decoding != Decoding::Utf8 {
        tracing::debug!(path = %path.display(), ?decoding, "non-plain-utf8 read");
    }
    Ok((text, decoding))
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so the target is never left partially
/// written; the original scripts truncated in place and carried that
/// risk. Acquires an advisory lock to prevent concurrent access.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file in the same directory, so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    // Release lock (implicit on drop, but be explicit)
    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}
