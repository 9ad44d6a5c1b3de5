//! Compression codecs.
//!
//! Stateless functions parameterized by the schema's [`Compression`] tag:
//! identity for `None`, the Snappy raw block format for `Snappy`.

use colf_types::Compression;

use crate::error::FormatError;

/// Compress a column payload as a single opaque block.
pub fn compress(codec: Compression, data: &[u8]) -> Result<Vec<u8>, FormatError> {
    match codec {
        Compression::None => Ok(data.to_vec()),
        Compression::Snappy => snap::raw::Encoder::new()
            .compress_vec(data)
            .map_err(|e| FormatError::Compression(e.to_string())),
    }
}

/// Decompress a stored column payload.
pub fn decompress(codec: Compression, data: &[u8]) -> Result<Vec<u8>, FormatError> {
    match codec {
        Compression::None => Ok(data.to_vec()),
        Compression::Snappy => snap::raw::Decoder::new()
            .decompress_vec(data)
            .map_err(|e| FormatError::Compression(e.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_roundtrip() {
        let data = b"some column payload".to_vec();
        let stored = compress(Compression::None, &data).unwrap();
        assert_eq!(stored, data);
        assert_eq!(decompress(Compression::None, &stored).unwrap(), data);
    }

    #[test]
    fn test_snappy_roundtrip() {
        let data: Vec<u8> = std::iter::repeat_n(b"abcd", 64).flatten().copied().collect();
        let stored = compress(Compression::Snappy, &data).unwrap();
        assert!(stored.len() < data.len());
        assert_eq!(decompress(Compression::Snappy, &stored).unwrap(), data);
    }

    #[test]
    fn test_snappy_empty_roundtrip() {
        let stored = compress(Compression::Snappy, &[]).unwrap();
        assert_eq!(decompress(Compression::Snappy, &stored).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_snappy_garbage_rejected() {
        assert!(matches!(
            decompress(Compression::Snappy, &[0xFF, 0xFE, 0xFD]),
            Err(FormatError::Compression(_))
        ));
    }
}
