//! Error types for surgeon-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from surgeon-text
    #[error(transparent)]
    Text(#[from] surgeon_text::Error),

    /// Error from surgeon-fs
    #[error(transparent)]
    Fs(#[from] surgeon_fs::Error),

    /// Error from surgeon-pack
    #[error(transparent)]
    Pack(#[from] surgeon_pack::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
