//! Row predicates.
//!
//! A predicate is a pure boolean function of a single row. Evaluation never
//! raises: a type mismatch, a null, or an unknown column simply makes the
//! predicate false (combinators excepted; `Not` of such a predicate is
//! true).

use colf_types::{Row, Value};

/// The closed predicate algebra accepted by [`crate::Query::filter`].
///
/// Ordering comparisons are defined on integer columns only; `Contains` and
/// `StartsWith` on string columns only. Any other value type, a null, or a
/// column the row does not carry evaluates to false.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Column equals the value.
    Equals(String, Value),
    /// Column is present and differs from the value.
    NotEquals(String, Value),
    /// Integer column strictly greater than the threshold.
    GreaterThan(String, i32),
    /// Integer column strictly less than the threshold.
    LessThan(String, i32),
    /// Integer column greater than or equal to the threshold.
    GreaterThanOrEqual(String, i32),
    /// Integer column less than or equal to the threshold.
    LessThanOrEqual(String, i32),
    /// Column is null in this row.
    IsNull(String),
    /// Column carries a value in this row.
    IsNotNull(String),
    /// String column contains the substring.
    Contains(String, String),
    /// String column starts with the prefix.
    StartsWith(String, String),
    /// Column's value is a member of the set.
    In(String, Vec<Value>),
    /// Both operands hold.
    And(Box<Predicate>, Box<Predicate>),
    /// Either operand holds.
    Or(Box<Predicate>, Box<Predicate>),
    /// The operand does not hold.
    Not(Box<Predicate>),
}

impl Predicate {
    /// Column equals the value.
    pub fn equals(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Equals(column.into(), value.into())
    }

    /// Column is present and differs from the value.
    pub fn not_equals(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::NotEquals(column.into(), value.into())
    }

    /// Integer column strictly greater than the threshold.
    pub fn greater_than(column: impl Into<String>, threshold: i32) -> Self {
        Self::GreaterThan(column.into(), threshold)
    }

    /// Integer column strictly less than the threshold.
    pub fn less_than(column: impl Into<String>, threshold: i32) -> Self {
        Self::LessThan(column.into(), threshold)
    }

    /// Integer column greater than or equal to the threshold.
    pub fn greater_than_or_equal(column: impl Into<String>, threshold: i32) -> Self {
        Self::GreaterThanOrEqual(column.into(), threshold)
    }

    /// Integer column less than or equal to the threshold.
    pub fn less_than_or_equal(column: impl Into<String>, threshold: i32) -> Self {
        Self::LessThanOrEqual(column.into(), threshold)
    }

    /// Column is null in this row.
    pub fn is_null(column: impl Into<String>) -> Self {
        Self::IsNull(column.into())
    }

    /// Column carries a value in this row.
    pub fn is_not_null(column: impl Into<String>) -> Self {
        Self::IsNotNull(column.into())
    }

    /// String column contains the substring.
    pub fn contains(column: impl Into<String>, needle: impl Into<String>) -> Self {
        Self::Contains(column.into(), needle.into())
    }

    /// String column starts with the prefix.
    pub fn starts_with(column: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::StartsWith(column.into(), prefix.into())
    }

    /// Column's value is a member of the set.
    pub fn in_set<V: Into<Value>>(
        column: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self::In(column.into(), values.into_iter().map(Into::into).collect())
    }

    /// Both this predicate and `other` hold.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Either this predicate or `other` holds.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// This predicate does not hold.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Evaluate against one row.
    #[must_use]
    pub fn eval(&self, row: &Row) -> bool {
        match self {
            Self::Equals(column, value) => row.get(column) == Some(value),
            Self::NotEquals(column, value) => {
                row.get(column).is_some_and(|actual| actual != value)
            }
            Self::GreaterThan(column, threshold) => cmp_i32(row, column, |v| v > *threshold),
            Self::LessThan(column, threshold) => cmp_i32(row, column, |v| v < *threshold),
            Self::GreaterThanOrEqual(column, threshold) => {
                cmp_i32(row, column, |v| v >= *threshold)
            }
            Self::LessThanOrEqual(column, threshold) => cmp_i32(row, column, |v| v <= *threshold),
            // An unknown column is not "null": the row must carry the key.
            Self::IsNull(column) => matches!(row.cell(column), Some(None)),
            Self::IsNotNull(column) => row.get(column).is_some(),
            Self::Contains(column, needle) => {
                row.get(column)
                    .and_then(Value::as_str)
                    .is_some_and(|s| s.contains(needle.as_str()))
            }
            Self::StartsWith(column, prefix) => {
                row.get(column)
                    .and_then(Value::as_str)
                    .is_some_and(|s| s.starts_with(prefix.as_str()))
            }
            Self::In(column, set) => row.get(column).is_some_and(|v| set.contains(v)),
            Self::And(a, b) => a.eval(row) && b.eval(row),
            Self::Or(a, b) => a.eval(row) || b.eval(row),
            Self::Not(inner) => !inner.eval(row),
        }
    }
}

fn cmp_i32(row: &Row, column: &str, check: impl Fn(i32) -> bool) -> bool {
    row.get(column).and_then(Value::as_i32).is_some_and(check)
}
