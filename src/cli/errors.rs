//! CLI errors

use thiserror::Error;

use crate::config::ConfigError;
use crate::orchestrator::DrawError;
use crate::pool::PoolError;
use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Pool(#[from] PoolError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Draw(#[from] DrawError),

    #[error("Failed to {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Invalid(String),
}

impl CliError {
    pub fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
