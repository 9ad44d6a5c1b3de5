#![no_main]

use std::io::Cursor;

use colf_store::{DecodeMode, Reader, ReaderOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Whole-file reads over arbitrary bytes must error, never panic
    for mode in [DecodeMode::Strict, DecodeMode::Lenient] {
        let cursor = Cursor::new(data.to_vec());
        let mut reader =
            Reader::with_options(cursor, ReaderOptions::new().decode_mode(mode));
        let _ = reader.read_rows();
        let _ = reader.column_names();
    }
});
