//! Error types for composition and request loading

use thiserror::Error;

/// Result type for compose operations
pub type Result<T> = std::result::Result<T, ComposeError>;

/// Errors that can occur while loading a compose request
#[derive(Error, Debug)]
pub enum ComposeError {
    /// Caller contract violation, e.g. an exhibits field that is not a sequence
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Malformed request JSON
    #[error("request parse error: {0}")]
    Json(#[from] serde_json::Error),
}
