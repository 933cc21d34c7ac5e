//! Orchestrator errors
//!
//! Rejections (caps, in-progress sequences, gate mismatches) are typed
//! errors, never panics; an empty pool is not an error at all.

use thiserror::Error;

use crate::pool::PoolError;
use crate::store::StoreError;

/// Result type for draw operations
pub type DrawResult<T> = Result<T, DrawError>;

/// Draw orchestration errors
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Category {0} already has a draw in progress")]
    DrawInProgress(String),

    #[error("Category {0} is at its winner cap")]
    CategoryCapReached(String),

    #[error("The global winner cap has been reached")]
    GlobalCapReached,

    #[error("Operator secret mismatch")]
    GateRejected,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Internal state error: {0}")]
    Internal(&'static str),
}

impl From<PoolError> for DrawError {
    fn from(e: PoolError) -> Self {
        match e {
            PoolError::UnknownCategory(name) => DrawError::UnknownCategory(name),
            _ => DrawError::Internal("candidate pool rejected a loaded roster"),
        }
    }
}

impl DrawError {
    /// Whether this error is a draw rejection (as opposed to a failure).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DrawError::DrawInProgress(_)
                | DrawError::CategoryCapReached(_)
                | DrawError::GlobalCapReached
        )
    }
}
