//! File header definitions.

use bytes::{Buf, BufMut};
use colf_types::Compression;

use crate::error::FormatError;

/// Magic bytes anchoring format identification.
pub const MAGIC: [u8; 4] = *b"COLF";

/// The version written by this implementation: the codec-bearing layout.
pub const FORMAT_VERSION: u8 = 2;

/// The legacy version: no codec byte, implicitly uncompressed.
pub const LEGACY_VERSION: u8 = 1;

/// Header size of the legacy (version 1) layout.
pub const HEADER_SIZE_V1: usize = 13;

/// Header size of the codec-bearing (version 2) layout.
pub const HEADER_SIZE_V2: usize = 14;

/// The COLF file header.
///
/// Version 1 headers are 13 bytes and carry no compression tag; version 2
/// headers are 14 bytes with the tag at offset 5. Readers dispatch on the
/// version byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Format version.
    pub version: u8,
    /// File-wide compression codec. Always `None` for version 1.
    pub compression: Compression,
    /// Number of columns.
    pub column_count: u32,
    /// Number of rows.
    pub row_count: u32,
}

impl FileHeader {
    /// Create a header in the current (version 2) layout.
    #[must_use]
    pub const fn new(compression: Compression, column_count: u32, row_count: u32) -> Self {
        Self {
            version: FORMAT_VERSION,
            compression,
            column_count,
            row_count,
        }
    }

    /// Create a header in the legacy (version 1) layout.
    #[must_use]
    pub const fn legacy(column_count: u32, row_count: u32) -> Self {
        Self {
            version: LEGACY_VERSION,
            compression: Compression::None,
            column_count,
            row_count,
        }
    }

    /// The encoded size of this header in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        if self.version >= 2 {
            HEADER_SIZE_V2
        } else {
            HEADER_SIZE_V1
        }
    }

    /// Parse a header from bytes.
    pub fn decode(src: &mut impl Buf) -> Result<Self, FormatError> {
        if src.remaining() < HEADER_SIZE_V1 {
            return Err(FormatError::Truncated {
                expected: HEADER_SIZE_V1,
                actual: src.remaining(),
            });
        }

        let mut magic = [0u8; 4];
        src.copy_to_slice(&mut magic);
        if magic != MAGIC {
            return Err(FormatError::InvalidMagic);
        }

        let version = src.get_u8();
        let compression = match version {
            LEGACY_VERSION => Compression::None,
            FORMAT_VERSION => {
                if src.remaining() < HEADER_SIZE_V2 - 5 {
                    return Err(FormatError::Truncated {
                        expected: HEADER_SIZE_V2 - 5,
                        actual: src.remaining(),
                    });
                }
                let code = src.get_u8();
                Compression::from_code(code).ok_or(FormatError::UnknownCompression(code))?
            }
            other => return Err(FormatError::UnsupportedVersion(other)),
        };

        let column_count = src.get_u32();
        let row_count = src.get_u32();

        Ok(Self {
            version,
            compression,
            column_count,
            row_count,
        })
    }

    /// Encode the header to bytes.
    pub fn encode(&self, dst: &mut impl BufMut) {
        dst.put_slice(&MAGIC);
        dst.put_u8(self.version);
        if self.version >= 2 {
            dst.put_u8(self.compression.code());
        }
        dst.put_u32(self.column_count);
        dst.put_u32(self.row_count);
    }
}
