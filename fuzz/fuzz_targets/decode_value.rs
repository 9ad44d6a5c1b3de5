#![no_main]

use arbitrary::Arbitrary;
use bytes::Bytes;
use colf_types::{ColumnType, decode_value};
use libfuzzer_sys::fuzz_target;

/// Fuzz input combining a type code with raw bytes.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    type_code: u8,
    data: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(ty) = ColumnType::from_code(input.type_code) else {
        return;
    };

    // Try to decode one value; repeated decodes exercise buffer advance
    let mut bytes = Bytes::from(input.data);
    while decode_value(&mut bytes, ty).is_ok() {
        if bytes.is_empty() {
            break;
        }
    }
});
