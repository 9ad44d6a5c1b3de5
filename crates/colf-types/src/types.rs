//! The closed set of column types and compression tags.

use crate::error::ValueError;

/// A column's data type.
///
/// The set is closed; each type carries a stable 1-byte code used in the
/// on-disk column metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColumnType {
    /// 32-bit signed integer, 4 bytes big-endian.
    Int32 = 1,
    /// UTF-8 string, u32 big-endian length prefix followed by the bytes.
    Utf8 = 2,
    /// Boolean, 1 byte.
    Bool = 3,
}

impl ColumnType {
    /// Create a column type from its on-disk code.
    pub fn from_code(code: u8) -> Result<Self, ValueError> {
        match code {
            1 => Ok(Self::Int32),
            2 => Ok(Self::Utf8),
            3 => Ok(Self::Bool),
            _ => Err(ValueError::UnknownTypeCode(code)),
        }
    }

    /// Get the on-disk type code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether values of this type occupy a fixed number of bytes.
    #[must_use]
    pub const fn is_fixed_width(self) -> bool {
        !matches!(self, Self::Utf8)
    }

    /// The encoded width of a fixed-width type, `None` for `Utf8`.
    #[must_use]
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Int32 => Some(4),
            Self::Bool => Some(1),
            Self::Utf8 => None,
        }
    }

    /// Get the type name as a string.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Int32 => "INT32",
            Self::Utf8 => "UTF8",
            Self::Bool => "BOOL",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// The compression codec applied to every column payload in a file.
///
/// The tag is stored in the file header (version 2 layouts and later) so
/// each file self-describes. Version 1 files carry no tag and are implicitly
/// uncompressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Compression {
    /// No compression; payloads are stored as-is.
    #[default]
    None = 0,
    /// Snappy raw block format.
    Snappy = 1,
}

impl Compression {
    /// Create a compression tag from its on-disk code.
    ///
    /// Returns `None` for unregistered codes; the caller decides how to
    /// surface the failure.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Snappy),
            _ => None,
        }
    }

    /// Get the on-disk codec code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_type_codes_roundtrip() {
        for ty in [ColumnType::Int32, ColumnType::Utf8, ColumnType::Bool] {
            assert_eq!(ColumnType::from_code(ty.code()).unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_type_code() {
        assert!(matches!(
            ColumnType::from_code(0),
            Err(ValueError::UnknownTypeCode(0))
        ));
        assert!(matches!(
            ColumnType::from_code(42),
            Err(ValueError::UnknownTypeCode(42))
        ));
    }

    #[test]
    fn test_fixed_widths() {
        assert_eq!(ColumnType::Int32.fixed_width(), Some(4));
        assert_eq!(ColumnType::Bool.fixed_width(), Some(1));
        assert_eq!(ColumnType::Utf8.fixed_width(), None);
        assert!(ColumnType::Int32.is_fixed_width());
        assert!(!ColumnType::Utf8.is_fixed_width());
    }

    #[test]
    fn test_compression_codes() {
        assert_eq!(Compression::from_code(0), Some(Compression::None));
        assert_eq!(Compression::from_code(1), Some(Compression::Snappy));
        assert_eq!(Compression::from_code(2), None);
        assert_eq!(Compression::Snappy.code(), 1);
    }
}
