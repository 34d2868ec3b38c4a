//! Error types for PDF export

use thiserror::Error;

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur during PDF export
#[derive(Error, Debug)]
pub enum ExportError {
    /// Typst compilation error
    #[error("Typst compilation failed: {0}")]
    Compilation(String),

    /// An image asset could not be read or materialized
    #[error("Asset error: {0}")]
    Asset(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
