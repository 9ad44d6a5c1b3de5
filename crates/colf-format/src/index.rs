//! Column index entries.

use bytes::{Buf, BufMut};

use crate::error::FormatError;

/// Size in bytes of one column index entry.
pub const INDEX_ENTRY_SIZE: usize = 24;

/// A fixed 24-byte record locating one column's metadata and data regions.
///
/// The trailing 4 reserved bytes are written as zero and ignored on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnIndexEntry {
    /// Absolute offset of the column's metadata block.
    pub metadata_offset: u64,
    /// Absolute offset of the column's data block (its 4-byte size prefix).
    pub data_offset: u64,
    /// Byte length of the stored payload, not counting the size prefix.
    pub data_size: u32,
}

impl ColumnIndexEntry {
    /// Create a new index entry.
    #[must_use]
    pub const fn new(metadata_offset: u64, data_offset: u64, data_size: u32) -> Self {
        Self {
            metadata_offset,
            data_offset,
            data_size,
        }
    }

    /// Parse an entry from bytes.
    pub fn decode(src: &mut impl Buf) -> Result<Self, FormatError> {
        if src.remaining() < INDEX_ENTRY_SIZE {
            return Err(FormatError::Truncated {
                expected: INDEX_ENTRY_SIZE,
                actual: src.remaining(),
            });
        }
        let metadata_offset = src.get_u64();
        let data_offset = src.get_u64();
        let data_size = src.get_u32();
        let _reserved = src.get_u32();
        Ok(Self {
            metadata_offset,
            data_offset,
            data_size,
        })
    }

    /// Encode the entry to bytes.
    pub fn encode(&self, dst: &mut impl BufMut) {
        dst.put_u64(self.metadata_offset);
        dst.put_u64(self.data_offset);
        dst.put_u32(self.data_size);
        dst.put_u32(0); // reserved
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bytes::BytesMut;

    use super::*;

    #[test]
    fn test_entry_roundtrip() {
        let entry = ColumnIndexEntry::new(0x1122, 0x3344_5566, 0x778899);
        let mut buf = BytesMut::new();
        entry.encode(&mut buf);
        assert_eq!(buf.len(), INDEX_ENTRY_SIZE);

        let mut cursor = buf.as_ref();
        assert_eq!(ColumnIndexEntry::decode(&mut cursor).unwrap(), entry);
    }

    #[test]
    fn test_reserved_written_as_zero() {
        let mut buf = BytesMut::new();
        ColumnIndexEntry::new(1, 2, 3).encode(&mut buf);
        assert_eq!(&buf[20..24], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_nonzero_reserved_tolerated() {
        let mut buf = BytesMut::new();
        ColumnIndexEntry::new(1, 2, 3).encode(&mut buf);
        let mut bytes = buf.to_vec();
        bytes[23] = 0xFF;
        let mut cursor = bytes.as_slice();
        let decoded = ColumnIndexEntry::decode(&mut cursor).unwrap();
        assert_eq!(decoded, ColumnIndexEntry::new(1, 2, 3));
    }

    #[test]
    fn test_truncated_entry() {
        let bytes = [0u8; 10];
        let mut cursor = bytes.as_slice();
        assert!(matches!(
            ColumnIndexEntry::decode(&mut cursor),
            Err(FormatError::Truncated {
                expected: 24,
                actual: 10,
            })
        ));
    }
}
