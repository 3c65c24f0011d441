//! Error types for the cryptic core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cryptic operations.
pub type CrypticResult<T> = Result<T, CrypticError>;

/// Errors that can occur outside the pure text transformations.
#[derive(Error, Debug)]
pub enum CrypticError {
    #[error("Search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid search response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Invalid search URL: {0}")]
    InvalidUrl(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}
