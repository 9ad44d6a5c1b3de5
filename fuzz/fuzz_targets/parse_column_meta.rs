#![no_main]

use bytes::Bytes;
use colf_format::decode_column_meta;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz column metadata block parsing
    let mut bytes = Bytes::copy_from_slice(data);
    let _ = decode_column_meta(&mut bytes);
});
