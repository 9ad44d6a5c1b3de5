//! Binary decoding for single values.
//!
//! The inverse of [`crate::encode`]; all integers are read big-endian.
//! Every consumption is bounds-checked before any byte is taken or any
//! allocation happens.

use bytes::{Buf, Bytes};

use crate::error::ValueError;
use crate::types::ColumnType;
use crate::value::Value;

/// Decode one value of type `ty` from the front of the buffer.
///
/// On success the buffer is advanced past the value. Length and bounds
/// failures consume nothing.
pub fn decode_value(buf: &mut Bytes, ty: ColumnType) -> Result<Value, ValueError> {
    match ty {
        ColumnType::Int32 => {
            check_remaining(buf, 4)?;
            Ok(Value::Int32(buf.get_i32()))
        }
        ColumnType::Bool => {
            check_remaining(buf, 1)?;
            // Writers emit exactly 0x00/0x01; any non-zero reads as true.
            Ok(Value::Bool(buf.get_u8() != 0))
        }
        ColumnType::Utf8 => {
            check_remaining(buf, 4)?;
            let len = i32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]);
            if len < 0 {
                return Err(ValueError::NegativeLength(len));
            }
            let len = len as usize;
            if buf.remaining() < 4 + len {
                return Err(ValueError::Truncated {
                    needed: 4 + len,
                    available: buf.remaining(),
                });
            }
            buf.advance(4);
            let raw = buf.split_to(len);
            let s = std::str::from_utf8(&raw).map_err(|_| ValueError::InvalidUtf8)?;
            Ok(Value::Utf8(s.to_owned()))
        }
    }
}

fn check_remaining(buf: &Bytes, needed: usize) -> Result<(), ValueError> {
    if buf.remaining() < needed {
        return Err(ValueError::Truncated {
            needed,
            available: buf.remaining(),
        });
    }
    Ok(())
}
