//! Storage error types.

use std::sync::Arc;

use colf_format::FormatError;
use colf_types::{SchemaError, ValueError};
use thiserror::Error;

/// Errors that can occur while writing or reading a file.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// IO error (wrapped in Arc for Clone support).
    #[error("IO error: {0}")]
    Io(Arc<std::io::Error>),

    /// Layout-level fault in the file being read or written.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The schema failed construction-time validation.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A read referenced a column name the file does not contain.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// Invalid writer or reader configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(Arc::new(e))
    }
}

impl From<ValueError> for StoreError {
    fn from(e: ValueError) -> Self {
        Self::Format(FormatError::Value(e))
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
