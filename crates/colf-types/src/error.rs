//! Data-model error types.

use thiserror::Error;

/// Errors raised while encoding or decoding a single value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Input ended before the declared value length.
    #[error("truncated value: need {needed} bytes, have {available}")]
    Truncated {
        /// Bytes needed to finish decoding.
        needed: usize,
        /// Bytes remaining in the input.
        available: usize,
    },

    /// A string length prefix decoded to a negative number.
    #[error("negative string length: {0}")]
    NegativeLength(i32),

    /// String bytes were not valid UTF-8.
    #[error("invalid UTF-8 in string value")]
    InvalidUtf8,

    /// A value's variant does not match the column type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Expected type name.
        expected: &'static str,
        /// Actual type name.
        actual: &'static str,
    },

    /// A null was supplied for a non-nullable column.
    #[error("null value in non-nullable column")]
    NullNotAllowed,

    /// Column metadata carries an unregistered type code.
    #[error("unknown type code: {0}")]
    UnknownTypeCode(u8),
}

/// Errors raised during schema construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A schema must contain at least one column.
    #[error("schema has no columns")]
    Empty,

    /// Column names must be non-empty.
    #[error("empty column name")]
    EmptyColumnName,

    /// Column names must be unique within a schema.
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
}
