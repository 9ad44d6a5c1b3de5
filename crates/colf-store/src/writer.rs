//! Single-pass file writer.

use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

use bytes::BytesMut;
use colf_format::{
    ColumnChunk, ColumnIndexEntry, FileHeader, FORMAT_VERSION, INDEX_ENTRY_SIZE, LEGACY_VERSION,
    column_meta_len, encode_column_meta,
};
use colf_types::{Compression, Row, Schema, Value};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::options::WriterOptions;

/// Writes a schema and a set of rows as one COLF file.
///
/// All offsets are computed before the first byte is emitted, so the file is
/// produced in a single forward pass and identical input always yields
/// byte-identical output. The file handle is closed on every exit path; on
/// failure a partially written file may remain (atomic replacement is not
/// promised).
#[derive(Debug, Clone)]
pub struct Writer {
    schema: Schema,
    options: WriterOptions,
}

impl Writer {
    /// Create a writer with default options.
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self::with_options(schema, WriterOptions::default())
    }

    /// Create a writer with explicit options.
    #[must_use]
    pub fn with_options(schema: Schema, options: WriterOptions) -> Self {
        Self { schema, options }
    }

    /// The writer's schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Write rows keyed by column name.
    ///
    /// A row may omit a column; a missing key is treated as an explicit
    /// null. This is the dictionary-shaped input; [`Self::write_columns`]
    /// accepts the same data as parallel per-column vectors and produces an
    /// identical file.
    pub fn write(&self, path: impl AsRef<Path>, rows: &[Row]) -> Result<()> {
        let columns = self.transpose(rows);
        self.write_vectors(path.as_ref(), &columns, rows.len())
    }

    /// Write parallel per-column value vectors in schema order.
    ///
    /// Every vector must have the same length. Equivalent to [`Self::write`]
    /// on the row shape of the same data.
    pub fn write_columns(
        &self,
        path: impl AsRef<Path>,
        columns: &[Vec<Option<Value>>],
    ) -> Result<()> {
        if columns.len() != self.schema.len() {
            return Err(StoreError::Config(format!(
                "expected {} column vectors, got {}",
                self.schema.len(),
                columns.len()
            )));
        }
        let row_count = columns.first().map_or(0, Vec::len);
        if let Some(odd) = columns.iter().find(|c| c.len() != row_count) {
            return Err(StoreError::Config(format!(
                "column vectors have unequal lengths ({} vs {})",
                row_count,
                odd.len()
            )));
        }
        self.write_vectors(path.as_ref(), columns, row_count)
    }

    /// Project each schema column out of the row set, missing keys
    /// becoming nulls.
    fn transpose(&self, rows: &[Row]) -> Vec<Vec<Option<Value>>> {
        self.schema
            .columns()
            .iter()
            .map(|column| {
                rows.iter()
                    .map(|row| row.get(&column.name).cloned())
                    .collect()
            })
            .collect()
    }

    fn write_vectors(
        &self,
        path: &Path,
        columns: &[Vec<Option<Value>>],
        row_count: usize,
    ) -> Result<()> {
        self.validate_options()?;
        let row_count = u32::try_from(row_count)
            .map_err(|_| StoreError::Config(format!("row count {row_count} exceeds u32 range")))?;

        debug!(
            path = %path.display(),
            columns = self.schema.len(),
            rows = row_count,
            version = self.options.version,
            "writing column file"
        );

        let compression = self.schema.compression();
        let chunks = self
            .schema
            .columns()
            .iter()
            .zip(columns)
            .map(|(column, cells)| ColumnChunk::build(column, cells, compression))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let header = if self.options.version == LEGACY_VERSION {
            FileHeader::legacy(self.schema.len() as u32, row_count)
        } else {
            FileHeader::new(compression, self.schema.len() as u32, row_count)
        };

        // All offsets are fixed by the schema and chunk sizes alone.
        let index_size = self.schema.len() * INDEX_ENTRY_SIZE;
        let metadata_start = header.size() as u64 + index_size as u64;
        let metadata_total: usize = self.schema.columns().iter().map(column_meta_len).sum();
        let data_start = metadata_start + metadata_total as u64;

        let mut entries = Vec::with_capacity(chunks.len());
        let mut metadata_offset = metadata_start;
        let mut data_offset = data_start;
        for (column, chunk) in self.schema.columns().iter().zip(&chunks) {
            entries.push(ColumnIndexEntry::new(
                metadata_offset,
                data_offset,
                chunk.data_size(),
            ));
            metadata_offset += column_meta_len(column) as u64;
            data_offset += 4 + u64::from(chunk.data_size());
        }

        let mut preamble = BytesMut::with_capacity(header.size() + index_size + metadata_total);
        header.encode(&mut preamble);
        for entry in &entries {
            entry.encode(&mut preamble);
        }
        for column in self.schema.columns() {
            encode_column_meta(column, &mut preamble);
        }

        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        out.write_all(&preamble)?;
        for chunk in &chunks {
            out.write_all(&chunk.data_size().to_be_bytes())?;
            out.write_all(&chunk.payload)?;
        }
        out.flush()?;

        debug!(
            path = %path.display(),
            bytes = data_offset,
            "column file written"
        );
        Ok(())
    }

    fn validate_options(&self) -> Result<()> {
        match self.options.version {
            FORMAT_VERSION => Ok(()),
            LEGACY_VERSION => {
                if self.schema.compression() != Compression::None {
                    return Err(StoreError::Config(
                        "version 1 files cannot carry a compression codec".into(),
                    ));
                }
                Ok(())
            }
            other => Err(StoreError::Config(format!(
                "cannot write unknown format version {other}"
            ))),
        }
    }
}
