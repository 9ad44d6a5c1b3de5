//! Per-column metadata blocks.
//!
//! Each column's metadata is `u32 name length ∥ UTF-8 name ∥ u8 type code ∥
//! u8 nullable flag`, laid out contiguously in schema order.

use bytes::{Buf, BufMut, Bytes};
use colf_types::{Column, ColumnType, ValueError};

use crate::error::FormatError;

/// The encoded size of a column's metadata block.
#[must_use]
pub fn column_meta_len(column: &Column) -> usize {
    4 + column.name.len() + 1 + 1
}

/// Encode a column's metadata block.
pub fn encode_column_meta(column: &Column, dst: &mut impl BufMut) {
    dst.put_u32(column.name.len() as u32);
    dst.put_slice(column.name.as_bytes());
    dst.put_u8(column.ty.code());
    dst.put_u8(u8::from(column.nullable));
}

/// Parse a column's metadata block from the front of the buffer.
pub fn decode_column_meta(src: &mut Bytes) -> Result<Column, FormatError> {
    if src.remaining() < 4 {
        return Err(FormatError::Truncated {
            expected: 4,
            actual: src.remaining(),
        });
    }
    let name_len = src.get_u32() as usize;
    if src.remaining() < name_len + 2 {
        return Err(FormatError::Truncated {
            expected: name_len + 2,
            actual: src.remaining(),
        });
    }
    let raw_name = src.split_to(name_len);
    let name = std::str::from_utf8(&raw_name)
        .map_err(|_| FormatError::Value(ValueError::InvalidUtf8))?
        .to_owned();
    let ty = ColumnType::from_code(src.get_u8()).map_err(|e| FormatError::in_column(&name, e))?;
    let nullable = src.get_u8() != 0;
    Ok(Column { name, ty, nullable })
}
