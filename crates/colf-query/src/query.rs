//! Fluent, lazily-evaluated query builder.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use colf_store::{Reader, Result};
use colf_types::{Row, Value};
use tracing::debug;

use crate::predicate::Predicate;

/// Extension trait turning a [`Reader`] into a [`Query`].
pub trait QueryExt<R> {
    /// Consume the reader and start a query over its rows.
    fn query(self) -> Query<R>;
}

impl<R: Read + Seek> QueryExt<R> for Reader<R> {
    fn query(self) -> Query<R> {
        Query::new(self)
    }
}

/// The materialized row set, loaded at the first terminal operation.
#[derive(Debug)]
struct CachedTable {
    column_order: Vec<String>,
    rows: Vec<Row>,
}

/// A fluent query over one COLF file.
///
/// Builder methods (`filter`, `select`, `skip`, `limit`) accumulate without
/// touching the file. Terminal operations (`rows`, `count`, aggregations,
/// `show`) load and cache the full row set on first use; rows keep the
/// order they appear in the file. Filters apply first, then `skip`, then
/// `limit`, then the projection.
pub struct Query<R> {
    reader: Reader<R>,
    predicates: Vec<Predicate>,
    projection: Option<Vec<String>>,
    skip: usize,
    limit: Option<usize>,
    cache: Option<CachedTable>,
}

impl Query<File> {
    /// Open a file and start a query with default reader options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Reader::open(path)?))
    }
}

impl<R: Read + Seek> Query<R> {
    /// Start a query over an existing reader.
    #[must_use]
    pub fn new(reader: Reader<R>) -> Self {
        Self {
            reader,
            predicates: Vec::new(),
            projection: None,
            skip: 0,
            limit: None,
            cache: None,
        }
    }

    // ========================================================================
    // Builder operations
    // ========================================================================

    /// Keep only rows for which the predicate holds.
    #[must_use]
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Restrict every output row to the given columns.
    ///
    /// Names the file does not contain are silently dropped from the
    /// output; filters still see the full row.
    #[must_use]
    pub fn select<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projection = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Drop the first `n` rows of the filtered sequence.
    #[must_use]
    pub fn skip(mut self, n: usize) -> Self {
        self.skip = n;
        self
    }

    /// Keep at most `n` rows of the filtered sequence.
    #[must_use]
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    // ========================================================================
    // Terminal operations
    // ========================================================================

    /// Materialize the resulting rows.
    pub fn rows(&mut self) -> Result<Vec<Row>> {
        self.ensure_loaded()?;
        let projection = self.projection.clone();
        let rows = self
            .selected()
            .map(|row| match &projection {
                None => row.clone(),
                Some(names) => names
                    .iter()
                    .filter_map(|name| {
                        row.cell(name).map(|cell| (name.clone(), cell.clone()))
                    })
                    .collect(),
            })
            .collect();
        Ok(rows)
    }

    /// Count the resulting rows.
    pub fn count(&mut self) -> Result<usize> {
        self.ensure_loaded()?;
        Ok(self.selected().count())
    }

    /// Count the rows whose `column` is non-null.
    pub fn count_non_null(&mut self, column: &str) -> Result<usize> {
        self.ensure_loaded()?;
        Ok(self
            .selected()
            .filter(|row| row.get(column).is_some())
            .count())
    }

    /// Sum an integer column, excluding nulls. Empty input sums to 0.
    pub fn sum(&mut self, column: &str) -> Result<i64> {
        self.ensure_loaded()?;
        Ok(self
            .int_values(column)
            .map(i64::from)
            .sum())
    }

    /// Average of an integer column, excluding nulls; `None` when no
    /// non-null values remain.
    pub fn avg(&mut self, column: &str) -> Result<Option<f64>> {
        self.ensure_loaded()?;
        let (mut total, mut count) = (0i64, 0u32);
        for v in self.int_values(column) {
            total += i64::from(v);
            count += 1;
        }
        Ok((count > 0).then(|| total as f64 / f64::from(count)))
    }

    /// Minimum of an integer column, excluding nulls.
    pub fn min(&mut self, column: &str) -> Result<Option<i32>> {
        self.ensure_loaded()?;
        Ok(self.int_values(column).min())
    }

    /// Maximum of an integer column, excluding nulls.
    pub fn max(&mut self, column: &str) -> Result<Option<i32>> {
        self.ensure_loaded()?;
        Ok(self.int_values(column).max())
    }

    /// The distinct (possibly-null) values of a column, in first-occurrence
    /// order.
    pub fn distinct(&mut self, column: &str) -> Result<Vec<Option<Value>>> {
        self.ensure_loaded()?;
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for row in self.selected() {
            // Rows without the key contribute nothing; a null cell is a
            // distinct value in its own right.
            let Some(cell) = row.cell(column) else {
                continue;
            };
            if seen.insert(cell.clone()) {
                out.push(cell.clone());
            }
        }
        Ok(out)
    }

    /// Count occurrences of each distinct (possibly-null) value.
    pub fn group_by_count(&mut self, column: &str) -> Result<HashMap<Option<Value>, usize>> {
        self.ensure_loaded()?;
        let mut counts = HashMap::new();
        for row in self.selected() {
            let Some(cell) = row.cell(column) else {
                continue;
            };
            *counts.entry(cell.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Render at most `limit` resulting rows as an aligned text table.
    ///
    /// Nulls print as `NULL`; columns follow the projection order, or the
    /// file's schema order when no projection is set.
    pub fn show(&mut self, limit: usize) -> Result<String> {
        self.ensure_loaded()?;
        let columns: Vec<String> = match &self.projection {
            // Projection names the file does not contain are dropped from
            // the output rows, so they get no header either.
            Some(names) => names
                .iter()
                .filter(|name| self.cached().column_order.contains(*name))
                .cloned()
                .collect(),
            None => self.cached().column_order.clone(),
        };
        let rows = self.rows()?;
        let shown = rows.iter().take(limit);

        let mut widths: Vec<usize> = columns.iter().map(String::len).collect();
        let mut cells: Vec<Vec<String>> = Vec::new();
        for row in shown {
            let rendered: Vec<String> = columns
                .iter()
                .map(|name| match row.get(name) {
                    Some(value) => value.to_string(),
                    None => "NULL".to_owned(),
                })
                .collect();
            for (width, cell) in widths.iter_mut().zip(&rendered) {
                *width = (*width).max(cell.len());
            }
            cells.push(rendered);
        }

        let mut out = String::new();
        let write_line = |out: &mut String, items: &[String], widths: &[usize]| {
            let line = items
                .iter()
                .zip(widths.iter().copied())
                .map(|(item, width)| format!("{item:<width$}"))
                .collect::<Vec<_>>()
                .join(" | ");
            let _ = writeln!(out, "{}", line.trim_end());
        };
        write_line(&mut out, &columns, &widths);
        let rule = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");
        let _ = writeln!(out, "{rule}");
        for rendered in &cells {
            write_line(&mut out, rendered, &widths);
        }
        Ok(out)
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Load and cache the full row set on first use.
    fn ensure_loaded(&mut self) -> Result<()> {
        if self.cache.is_none() {
            let column_order = self.reader.column_names()?;
            let rows = self.reader.read_rows()?;
            debug!(rows = rows.len(), "materialized row set for query");
            self.cache = Some(CachedTable { column_order, rows });
        }
        Ok(())
    }

    /// The cached table; `ensure_loaded` must have run.
    #[allow(clippy::expect_used)] // populated by every terminal's ensure_loaded
    fn cached(&self) -> &CachedTable {
        self.cache.as_ref().expect("row cache loaded")
    }

    /// Filtered, skipped, and limited rows, pre-projection.
    fn selected(&self) -> impl Iterator<Item = &Row> {
        self.cached()
            .rows
            .iter()
            .filter(|row| self.predicates.iter().all(|p| p.eval(row)))
            .skip(self.skip)
            .take(self.limit.unwrap_or(usize::MAX))
    }

    /// Non-null integer values of `column` in the selected rows.
    fn int_values(&self, column: &str) -> impl Iterator<Item = i32> {
        self.selected()
            .filter_map(move |row| row.get(column).and_then(Value::as_i32))
    }
}

impl<R> std::fmt::Debug for Query<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("predicates", &self.predicates.len())
            .field("projection", &self.projection)
            .field("skip", &self.skip)
            .field("limit", &self.limit)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}
