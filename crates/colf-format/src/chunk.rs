//! Write-side column chunks.

use bytes::{BufMut, Bytes, BytesMut};
use colf_types::{Column, Compression, NullBitmap, Value, ValueError, encode_value, encoded_len};

use crate::compress::compress;
use crate::error::FormatError;

/// A column's encoded payload as produced during a write.
///
/// The payload is the null bitmap followed by the concatenated encodings of
/// the non-null values in row order, compressed as a single block when the
/// schema selects a codec.
#[derive(Debug, Clone)]
pub struct ColumnChunk {
    /// The column this chunk stores.
    pub column: Column,
    /// The stored payload, after optional compression.
    pub payload: Bytes,
    /// Number of rows covered by the chunk.
    pub row_count: u32,
}

impl ColumnChunk {
    /// Build a chunk by encoding one column's cells in row order.
    ///
    /// A null cell in a non-nullable column is rejected with
    /// [`ValueError::NullNotAllowed`]; a value of the wrong variant with
    /// [`ValueError::TypeMismatch`], both carrying the column name.
    pub fn build(
        column: &Column,
        cells: &[Option<Value>],
        compression: Compression,
    ) -> Result<Self, FormatError> {
        let mut bitmap = NullBitmap::new(cells.len());
        let value_len: usize = cells
            .iter()
            .flatten()
            .map(encoded_len)
            .sum();

        let mut raw = BytesMut::with_capacity(bitmap.as_bytes().len() + value_len);
        for (row, cell) in cells.iter().enumerate() {
            if cell.is_none() {
                if !column.nullable {
                    return Err(FormatError::in_column(
                        &column.name,
                        ValueError::NullNotAllowed,
                    ));
                }
                bitmap.set_null(row);
            }
        }
        raw.put_slice(bitmap.as_bytes());
        for value in cells.iter().flatten() {
            encode_value(value, column.ty, &mut raw)
                .map_err(|e| FormatError::in_column(&column.name, e))?;
        }

        let payload = match compression {
            Compression::None => raw.freeze(),
            codec => Bytes::from(compress(codec, &raw)?),
        };

        Ok(Self {
            column: column.clone(),
            payload,
            row_count: cells.len() as u32,
        })
    }

    /// Byte length of the stored payload (the index entry's `data_size`).
    #[must_use]
    pub fn data_size(&self) -> u32 {
        self.payload.len() as u32
    }
}
