//! Canned datasets for integration tests.

use std::path::Path;

use colf_store::{Result, Writer};
use colf_types::{ColumnType, Row, Schema};

/// The employee schema shared by the query-evaluator tests.
///
/// Columns: `id` (non-null), `name` (non-null), `age` and `department`
/// (nullable), `active` (non-null).
#[allow(clippy::expect_used)] // a fixed, known-valid column list
pub fn employee_schema() -> Schema {
    Schema::builder()
        .column("id", ColumnType::Int32)
        .column("name", ColumnType::Utf8)
        .nullable_column("age", ColumnType::Int32)
        .nullable_column("department", ColumnType::Utf8)
        .column("active", ColumnType::Bool)
        .build()
        .expect("employee schema is valid")
}

/// Seven employees covering every filter branch the query tests exercise.
pub fn employee_rows() -> Vec<Row> {
    let employee = |id: i32, name: &str, age: i32, dept: &str, active: bool| {
        Row::new()
            .set("id", id)
            .set("name", name)
            .set("age", age)
            .set("department", dept)
            .set("active", active)
    };
    vec![
        employee(1, "Alice", 30, "Engineering", true),
        employee(2, "Bob", 25, "Engineering", true),
        employee(3, "Carol", 35, "Marketing", true),
        employee(4, "Dave", 41, "Engineering", false),
        employee(5, "Eve", 42, "Engineering", true),
        employee(6, "Frank", 28, "Sales", true),
        employee(7, "Grace", 23, "Engineering", true),
    ]
}

/// Write the employee dataset to `path` with default writer options.
pub fn write_employees(path: impl AsRef<Path>) -> Result<()> {
    Writer::new(employee_schema()).write(path, &employee_rows())
}
