//! Error types for surgeon-pack

use std::path::PathBuf;

/// Result type for surgeon-pack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while packaging
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Zip write failed: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
