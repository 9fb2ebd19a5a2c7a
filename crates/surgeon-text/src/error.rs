//! Error types for surgeon-text

/// Result type for surgeon-text operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during text surgery
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Edit `{edit}`: no {role} marker matched")]
    RegionNotFound { edit: String, role: Role },

    #[error("Edit `{edit}`: no opening delimiter after start marker")]
    OpenDelimiterMissing { edit: String },

    #[error("Edit `{edit}`: delimiters never rebalance before end of buffer")]
    Unbalanced { edit: String },

    #[error(
        "Edit `{edit}`: no closing-delimiter line within {window} lines of the end marker"
    )]
    ClosingLineMissing { edit: String, window: usize },

    #[error("Invalid marker pattern: {0}")]
    BadPattern(#[from] regex::Error),

    #[error("Failed to parse edit plan: {message}")]
    PlanParse { message: String },
}

/// Which end of a region a marker chain was locating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Start,
    End,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Start => write!(f, "start"),
            Role::End => write!(f, "end"),
        }
    }
}

impl Error {
    pub fn region_not_found(edit: impl Into<String>, role: Role) -> Self {
        Self::RegionNotFound {
            edit: edit.into(),
            role,
        }
    }
}
