//! Candidate pool errors

use thiserror::Error;

/// Result type for pool operations
pub type PoolResult<T> = Result<T, PoolError>;

/// Pool errors
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Failed to read roster file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid roster JSON: {0}")]
    InvalidRoster(#[from] serde_json::Error),

    #[error("Roster is empty")]
    EmptyRoster,

    #[error("Candidate has an empty {0} field")]
    EmptyField(&'static str),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
