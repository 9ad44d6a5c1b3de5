//! # colf-store
//!
//! File writer and random-access reader for the COLF columnar format.
//!
//! The writer transposes row-oriented input into per-column chunks and emits
//! the whole file in a single pass with offsets computed up front. The
//! reader parses the header and column index, then seeks directly to any
//! column's metadata and data without touching the data bytes of other
//! columns.
//!
//! Both sides are synchronous and blocking; a reader owns its source and
//! mutates the file position, so callers wanting parallelism open one
//! reader per thread.
//!
//! ## Example
//!
//! ```rust,ignore
//! use colf_store::{Reader, Writer};
//! use colf_types::{ColumnType, Row, Schema};
//!
//! let schema = Schema::builder()
//!     .column("id", ColumnType::Int32)
//!     .nullable_column("name", ColumnType::Utf8)
//!     .build()?;
//!
//! Writer::new(schema).write(
//!     "people.colf",
//!     &[Row::new().set("id", 1).set("name", "Alice")],
//! )?;
//!
//! let mut reader = Reader::open("people.colf")?;
//! let names = reader.read_column("name")?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod options;
pub mod reader;
pub mod writer;

pub use error::{Result, StoreError};
pub use options::{DecodeMode, ReaderOptions, WriterOptions};
pub use reader::Reader;
pub use writer::Writer;
