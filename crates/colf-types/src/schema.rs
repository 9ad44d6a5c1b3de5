//! Schema and column definitions.

use std::collections::HashMap;

use crate::error::SchemaError;
use crate::types::{ColumnType, Compression};

/// A single column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name, non-empty and unique within its schema.
    pub name: String,
    /// The column's data type.
    pub ty: ColumnType,
    /// Whether the column allows null values.
    pub nullable: bool,
}

impl Column {
    /// Create a new non-nullable column.
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
        }
    }

    /// Set whether the column is nullable.
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}

/// An ordered list of columns plus the file's compression tag.
///
/// Column names are validated at construction: the list must be non-empty,
/// every name must be non-empty, and names must be unique. A name-to-index
/// map is built once so lookups during reads stay O(1).
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<Column>,
    by_name: HashMap<String, usize>,
    compression: Compression,
}

impl Schema {
    /// Build a schema from a column list, with no compression.
    pub fn new(columns: Vec<Column>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }
        let mut by_name = HashMap::with_capacity(columns.len());
        for (index, column) in columns.iter().enumerate() {
            if column.name.is_empty() {
                return Err(SchemaError::EmptyColumnName);
            }
            if by_name.insert(column.name.clone(), index).is_some() {
                return Err(SchemaError::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self {
            columns,
            by_name,
            compression: Compression::None,
        })
    }

    /// Start building a schema incrementally.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Set the compression codec for every column payload in the file.
    #[must_use]
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// The columns in schema order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// A schema is never empty; provided for container-API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get a column by position.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Find a column's position by name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Get a column by name.
    #[must_use]
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.index_of(name).and_then(|i| self.columns.get(i))
    }

    /// The file-wide compression codec.
    #[must_use]
    pub fn compression(&self) -> Compression {
        self.compression
    }
}

/// Incremental [`Schema`] builder.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    columns: Vec<Column>,
    compression: Compression,
}

impl SchemaBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a non-nullable column.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>, ty: ColumnType) -> Self {
        self.columns.push(Column::new(name, ty));
        self
    }

    /// Append a nullable column.
    #[must_use]
    pub fn nullable_column(mut self, name: impl Into<String>, ty: ColumnType) -> Self {
        self.columns.push(Column::new(name, ty).with_nullable(true));
        self
    }

    /// Set the compression codec.
    #[must_use]
    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Validate and build the schema.
    pub fn build(self) -> Result<Schema, SchemaError> {
        Ok(Schema::new(self.columns)?.with_compression(self.compression))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lookup() {
        let schema = Schema::builder()
            .column("id", ColumnType::Int32)
            .nullable_column("name", ColumnType::Utf8)
            .column("active", ColumnType::Bool)
            .build()
            .unwrap();

        assert_eq!(schema.len(), 3);
        assert_eq!(schema.index_of("name"), Some(1));
        assert_eq!(schema.index_of("missing"), None);
        assert_eq!(schema.column_by_name("id").unwrap().ty, ColumnType::Int32);
        assert!(schema.column_by_name("name").unwrap().nullable);
        assert!(!schema.column_by_name("active").unwrap().nullable);
    }

    #[test]
    fn test_empty_schema_rejected() {
        assert_eq!(Schema::new(Vec::new()).unwrap_err(), SchemaError::Empty);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = Schema::new(vec![
            Column::new("a", ColumnType::Int32),
            Column::new("a", ColumnType::Bool),
        ])
        .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateColumn("a".into()));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Schema::new(vec![Column::new("", ColumnType::Int32)]).unwrap_err();
        assert_eq!(err, SchemaError::EmptyColumnName);
    }

    #[test]
    fn test_compression_tag() {
        let schema = Schema::builder()
            .column("a", ColumnType::Int32)
            .compression(Compression::Snappy)
            .build()
            .unwrap();
        assert_eq!(schema.compression(), Compression::Snappy);
    }
}
