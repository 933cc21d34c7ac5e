//! Winner store errors
//!
//! Store failures are never fatal to the process: the orchestrator logs
//! them and degrades (stale counts, aborted single draw).

use thiserror::Error;
use uuid::Uuid;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Winner store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O failure while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt record at byte offset {offset}: {reason}")]
    Corruption { offset: u64, reason: String },

    #[error("Invalid winner payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Winner not found: {0}")]
    NotFound(Uuid),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub fn corruption(offset: u64, reason: impl Into<String>) -> Self {
        Self::Corruption {
            offset,
            reason: reason.into(),
        }
    }
}
