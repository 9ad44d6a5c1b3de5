//! Format-level error types.

use colf_types::ValueError;
use thiserror::Error;

/// Errors raised while encoding or decoding the file layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The file does not begin with the COLF magic bytes.
    #[error("invalid magic bytes")]
    InvalidMagic,

    /// The header carries a version this implementation does not know.
    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u8),

    /// The header carries an unregistered compression codec tag.
    #[error("unknown compression codec: {0}")]
    UnknownCompression(u8),

    /// A fixed-size region ended early.
    #[error("truncated region: expected {expected} bytes, found {actual}")]
    Truncated {
        /// Bytes the region requires.
        expected: usize,
        /// Bytes actually available.
        actual: usize,
    },

    /// The compression codec rejected its input.
    #[error("compression codec failure: {0}")]
    Compression(String),

    /// A value-level fault outside any one column's context.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// A value-level fault inside a named column.
    #[error("column '{column}': {source}")]
    Column {
        /// The column being encoded or decoded.
        column: String,
        /// The underlying value fault.
        source: ValueError,
    },
}

impl FormatError {
    /// Attach a column name to a value-level fault.
    #[must_use]
    pub fn in_column(column: impl Into<String>, source: ValueError) -> Self {
        Self::Column {
            column: column.into(),
            source,
        }
    }
}
