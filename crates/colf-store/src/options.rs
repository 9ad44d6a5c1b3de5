//! Writer and reader configuration.

use colf_format::FORMAT_VERSION;

/// How the reader treats a column payload that ends before all declared
/// non-null values have been decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Fail the read with a truncation error.
    #[default]
    Strict,
    /// Recover by yielding nulls for the exhausted tail of the column.
    ///
    /// Matches the tolerant behavior of older readers; a warning is logged
    /// when recovery happens.
    Lenient,
}

/// Configuration for [`crate::Writer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterOptions {
    /// File format version to emit (default: 2, the codec-bearing layout).
    ///
    /// Version 1 writes the legacy 13-byte header without a compression
    /// tag and is only valid for uncompressed schemas.
    pub version: u8,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
        }
    }
}

impl WriterOptions {
    /// Create writer options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the format version to emit.
    #[must_use]
    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }
}

/// Configuration for [`crate::Reader`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Truncation handling (default: [`DecodeMode::Strict`]).
    pub decode_mode: DecodeMode,
}

impl ReaderOptions {
    /// Create reader options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the truncation handling mode.
    #[must_use]
    pub fn decode_mode(mut self, mode: DecodeMode) -> Self {
        self.decode_mode = mode;
        self
    }
}
