//! Property-based round-trip tests over arbitrary schemas and data.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use colf_format::{FORMAT_VERSION, LEGACY_VERSION};
use colf_store::{Reader, Writer, WriterOptions};
use colf_types::{Column, ColumnType, Compression, Schema, Value};
use proptest::prelude::*;
use tempfile::TempDir;

#[derive(Debug, Clone)]
struct ColumnShape {
    ty: ColumnType,
    nullable: bool,
}

fn column_shape() -> impl Strategy<Value = ColumnShape> {
    (
        prop_oneof![
            Just(ColumnType::Int32),
            Just(ColumnType::Utf8),
            Just(ColumnType::Bool),
        ],
        any::<bool>(),
    )
        .prop_map(|(ty, nullable)| ColumnShape { ty, nullable })
}

fn cell(shape: &ColumnShape) -> BoxedStrategy<Option<Value>> {
    let present = match shape.ty {
        ColumnType::Int32 => any::<i32>().prop_map(Value::Int32).boxed(),
        ColumnType::Utf8 => ".{0,16}".prop_map(Value::Utf8).boxed(),
        ColumnType::Bool => any::<bool>().prop_map(Value::Bool).boxed(),
    };
    if shape.nullable {
        proptest::option::of(present).boxed()
    } else {
        present.prop_map(Some).boxed()
    }
}

/// Valid codec/version pairings: the legacy layout has no codec byte, so
/// version 1 only ever pairs with `Compression::None`.
fn codec_and_version() -> impl Strategy<Value = (Compression, u8)> {
    prop_oneof![
        Just((Compression::None, LEGACY_VERSION)),
        Just((Compression::None, FORMAT_VERSION)),
        Just((Compression::Snappy, FORMAT_VERSION)),
    ]
}

fn table() -> impl Strategy<Value = (Vec<ColumnShape>, Vec<Vec<Option<Value>>>, Compression, u8)> {
    (
        proptest::collection::vec(column_shape(), 1..5),
        0usize..24,
        codec_and_version(),
    )
        .prop_flat_map(|(shapes, rows, (compression, version))| {
            let columns: Vec<BoxedStrategy<Vec<Option<Value>>>> = shapes
                .iter()
                .map(|shape| proptest::collection::vec(cell(shape), rows).boxed())
                .collect();
            (Just(shapes), columns, Just(compression), Just(version))
        })
}

fn build_schema(shapes: &[ColumnShape], compression: Compression) -> Schema {
    let columns = shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| Column::new(format!("c{i}"), shape.ty).with_nullable(shape.nullable))
        .collect();
    Schema::new(columns).unwrap().with_compression(compression)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_roundtrip_identity((shapes, columns, compression, version) in table()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prop.colf");
        let schema = build_schema(&shapes, compression);
        let writer = Writer::with_options(schema, WriterOptions::new().version(version));

        writer.write_columns(&path, &columns).unwrap();
        prop_assert_eq!(std::fs::read(&path).unwrap()[4], version);

        let mut reader = Reader::open(&path).unwrap();
        for (i, expected) in columns.iter().enumerate() {
            let actual = reader.read_column(&format!("c{i}")).unwrap();
            prop_assert_eq!(&actual, expected);
        }
    }

    #[test]
    fn prop_write_deterministic((shapes, columns, compression, version) in table()) {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.colf");
        let b = dir.path().join("b.colf");
        let schema = build_schema(&shapes, compression);
        let writer = Writer::with_options(schema, WriterOptions::new().version(version));

        writer.write_columns(&a, &columns).unwrap();
        writer.write_columns(&b, &columns).unwrap();
        prop_assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }
}
