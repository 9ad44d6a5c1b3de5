//! Binary encoding for single values.
//!
//! Pure, stateless functions; all integers are written big-endian. A null
//! never reaches these functions: nulls are recorded in the column bitmap
//! and occupy no bytes in the value region.

use bytes::BufMut;

use crate::error::ValueError;
use crate::types::ColumnType;
use crate::value::Value;

/// Encode one value into the buffer.
///
/// The value's variant must match `ty`; a mismatch surfaces as
/// [`ValueError::TypeMismatch`] and nothing is written.
pub fn encode_value(
    value: &Value,
    ty: ColumnType,
    buf: &mut impl BufMut,
) -> Result<(), ValueError> {
    match (ty, value) {
        (ColumnType::Int32, Value::Int32(v)) => {
            buf.put_i32(*v);
            Ok(())
        }
        (ColumnType::Bool, Value::Bool(v)) => {
            buf.put_u8(u8::from(*v));
            Ok(())
        }
        (ColumnType::Utf8, Value::Utf8(s)) => {
            buf.put_u32(s.len() as u32);
            buf.put_slice(s.as_bytes());
            Ok(())
        }
        _ => Err(ValueError::TypeMismatch {
            expected: ty.type_name(),
            actual: value.type_name(),
        }),
    }
}

/// The number of bytes [`encode_value`] will write for this value.
#[must_use]
pub fn encoded_len(value: &Value) -> usize {
    match value {
        Value::Int32(_) => 4,
        Value::Bool(_) => 1,
        Value::Utf8(s) => 4 + s.len(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bytes::BytesMut;

    use super::*;

    #[test]
    fn test_encode_int32() {
        let mut buf = BytesMut::new();
        encode_value(&Value::Int32(1), ColumnType::Int32, &mut buf).unwrap();
        assert_eq!(&buf[..], &[0x00, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_encode_int32_negative() {
        let mut buf = BytesMut::new();
        encode_value(&Value::Int32(-2), ColumnType::Int32, &mut buf).unwrap();
        assert_eq!(&buf[..], &[0xFF, 0xFF, 0xFF, 0xFE]);
    }

    #[test]
    fn test_encode_bool() {
        let mut buf = BytesMut::new();
        encode_value(&Value::Bool(true), ColumnType::Bool, &mut buf).unwrap();
        encode_value(&Value::Bool(false), ColumnType::Bool, &mut buf).unwrap();
        assert_eq!(&buf[..], &[0x01, 0x00]);
    }

    #[test]
    fn test_encode_string() {
        let mut buf = BytesMut::new();
        encode_value(&Value::from("ab"), ColumnType::Utf8, &mut buf).unwrap();
        assert_eq!(&buf[..], &[0, 0, 0, 2, b'a', b'b']);
    }

    #[test]
    fn test_encode_empty_string() {
        let mut buf = BytesMut::new();
        encode_value(&Value::from(""), ColumnType::Utf8, &mut buf).unwrap();
        assert_eq!(&buf[..], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_multibyte_string() {
        let mut buf = BytesMut::new();
        encode_value(&Value::from("é"), ColumnType::Utf8, &mut buf).unwrap();
        assert_eq!(&buf[..], &[0, 0, 0, 2, 0xC3, 0xA9]);
    }

    #[test]
    fn test_type_mismatch() {
        let mut buf = BytesMut::new();
        let err = encode_value(&Value::from("x"), ColumnType::Int32, &mut buf).unwrap_err();
        assert_eq!(
            err,
            ValueError::TypeMismatch {
                expected: "INT32",
                actual: "UTF8",
            }
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(encoded_len(&Value::Int32(7)), 4);
        assert_eq!(encoded_len(&Value::Bool(false)), 1);
        assert_eq!(encoded_len(&Value::from("abc")), 7);
        assert_eq!(encoded_len(&Value::from("")), 4);
    }
}
