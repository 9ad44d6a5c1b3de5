//! Row representation.

use std::collections::HashMap;

use crate::value::Value;

/// A row: a mapping from column name to optional value.
///
/// Rows are the input shape of the writer and the output shape of the
/// reader. A missing key and an explicit null are equivalent; the writer
/// treats both as a null cell, and the reader always populates every
/// schema column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: HashMap<String, Option<Value>>,
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column to a present value, consuming and returning the row.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cells.insert(name.into(), Some(value.into()));
        self
    }

    /// Set a column to null, consuming and returning the row.
    #[must_use]
    pub fn set_null(mut self, name: impl Into<String>) -> Self {
        self.cells.insert(name.into(), None);
        self
    }

    /// Insert a cell in place.
    pub fn insert(&mut self, name: impl Into<String>, cell: Option<Value>) {
        self.cells.insert(name.into(), cell);
    }

    /// Get the value for a column. Returns `None` for a null cell and for
    /// a column the row does not contain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.cells.get(name).and_then(Option::as_ref)
    }

    /// The cell for a column: `None` if the row has no such key,
    /// `Some(None)` for an explicit null.
    #[must_use]
    pub fn cell(&self, name: &str) -> Option<&Option<Value>> {
        self.cells.get(name)
    }

    /// Whether the column is null in this row (explicitly, or by absence).
    #[must_use]
    pub fn is_null(&self, name: &str) -> bool {
        self.get(name).is_none()
    }

    /// Whether the row carries a cell for this column name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cells.contains_key(name)
    }

    /// The number of cells in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over `(name, cell)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Option<Value>)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Option<Value>)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Option<Value>)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
