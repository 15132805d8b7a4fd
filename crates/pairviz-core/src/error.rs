//! Centralized error types for pairviz.

use thiserror::Error;

/// Main error type for pairviz operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error: {0}")]
    Database(#[from] pairviz_db::DbError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Token not found with id: {id}")]
    UnknownToken { id: i64 },

    #[error("Unknown layout engine `{0}` (expected sfdp|fdp|neato|dot|circo|twopi)")]
    InvalidEngine(String),
}

/// Result type for pairviz operations.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
