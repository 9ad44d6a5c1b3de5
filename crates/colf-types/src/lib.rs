//! # colf-types
//!
//! Column types, schemas, values, and per-value binary codecs for the COLF
//! columnar file format.
//!
//! This crate defines the data model shared by the writer, the reader, and
//! the query evaluator: the closed set of column types, the tagged [`Value`]
//! variant, schema construction with name-uniqueness validation, the packed
//! [`NullBitmap`], and the pure encode/decode functions for single values.
//!
//! ## Type Mappings
//!
//! | Column type | Code | Rust type | Width |
//! |-------------|------|-----------|-------|
//! | `Int32`     | 1    | `i32`     | 4 bytes, big-endian |
//! | `Utf8`      | 2    | `String`  | u32 length prefix + bytes |
//! | `Bool`      | 3    | `bool`    | 1 byte (`0x00`/`0x01`) |
//!
//! A null cell is represented as `Option::<Value>::None`; nulls occupy no
//! bytes in a column's value region and are tracked only by the bitmap.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod bitmap;
pub mod decode;
pub mod encode;
pub mod error;
pub mod row;
pub mod schema;
pub mod types;
pub mod value;

pub use bitmap::NullBitmap;
pub use decode::decode_value;
pub use encode::{encode_value, encoded_len};
pub use error::{SchemaError, ValueError};
pub use row::Row;
pub use schema::{Column, Schema, SchemaBuilder};
pub use types::{ColumnType, Compression};
pub use value::Value;
