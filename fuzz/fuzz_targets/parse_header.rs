#![no_main]

use colf_format::FileHeader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz file header parsing
    let mut cursor = data;
    let _ = FileHeader::decode(&mut cursor);
});
