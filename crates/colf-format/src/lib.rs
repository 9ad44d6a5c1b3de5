//! # colf-format
//!
//! Pure implementation of the COLF columnar file layout.
//!
//! This crate provides the fixed binary structures of the format: the file
//! header, the 24-byte column index entries, the per-column metadata blocks,
//! the write-side column chunks, and the compression codecs.
//!
//! ## Design Philosophy
//!
//! This crate is intentionally IO-agnostic. It contains no file handling and
//! makes no assumptions about where the bytes come from or go. The storage
//! crate builds upon this foundation to provide seekable file access.
//!
//! ## File Layout
//!
//! ```text
//! [ Header ]           magic "COLF", version, codec tag (v2+), counts
//! [ Column Index ]     column_count x 24 bytes, schema order
//! [ Metadata Region ]  per column: name, type code, nullable flag
//! [ Data Region ]      per column: u32 payload size, then the payload
//! ```
//!
//! All integers are big-endian. Each column payload is the null bitmap
//! followed by the concatenated encodings of the non-null values, optionally
//! compressed as a single block.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod chunk;
pub mod compress;
pub mod error;
pub mod header;
pub mod index;
pub mod metadata;

pub use chunk::ColumnChunk;
pub use compress::{compress, decompress};
pub use error::FormatError;
pub use header::{
    FileHeader, FORMAT_VERSION, HEADER_SIZE_V1, HEADER_SIZE_V2, LEGACY_VERSION, MAGIC,
};
pub use index::{ColumnIndexEntry, INDEX_ENTRY_SIZE};
pub use metadata::{column_meta_len, decode_column_meta, encode_column_meta};
