//! Random-access file reader.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use bytes::{Bytes, BytesMut};
use colf_format::{
    ColumnIndexEntry, FileHeader, FormatError, HEADER_SIZE_V2, INDEX_ENTRY_SIZE,
    decode_column_meta, decompress,
};
use colf_types::{Column, NullBitmap, Row, SchemaError, Value, ValueError, decode_value};
use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::options::{DecodeMode, ReaderOptions};

/// Random-access parser over a seekable COLF file.
///
/// Every operation independently re-parses the header and column index, so
/// a reader holds no state beyond its source and options. Reading one
/// column seeks straight to that column's data block and never touches the
/// data bytes of any other column.
///
/// A reader mutates its source's file position and is therefore not usable
/// from multiple threads at once; open one reader per caller instead. The
/// source is dropped (and a file handle closed) when the reader goes out of
/// scope, on every exit path.
#[derive(Debug)]
pub struct Reader<R> {
    source: R,
    options: ReaderOptions,
}

impl Reader<File> {
    /// Open a file with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_options(path, ReaderOptions::default())
    }

    /// Open a file with explicit options.
    pub fn open_with_options(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self> {
        Ok(Self::with_options(File::open(path)?, options))
    }
}

impl<R: Read + Seek> Reader<R> {
    /// Wrap any seekable source with default options.
    #[must_use]
    pub fn new(source: R) -> Self {
        Self::with_options(source, ReaderOptions::default())
    }

    /// Wrap any seekable source with explicit options.
    #[must_use]
    pub fn with_options(source: R, options: ReaderOptions) -> Self {
        Self { source, options }
    }

    /// The column names in schema order.
    pub fn column_names(&mut self) -> Result<Vec<String>> {
        let (_, entries) = self.parse_preamble()?;
        let mut names = Vec::with_capacity(entries.len());
        for entry in &entries {
            names.push(self.read_column_meta(entry)?.name);
        }
        Ok(names)
    }

    /// Read one column as a null-aware value vector of length `row_count`.
    pub fn read_column(&mut self, name: &str) -> Result<Vec<Option<Value>>> {
        let (header, entries) = self.parse_preamble()?;
        for entry in &entries {
            let column = self.read_column_meta(entry)?;
            if column.name != name {
                continue;
            }
            debug!(
                column = name,
                data_offset = entry.data_offset,
                data_size = entry.data_size,
                "reading column"
            );
            let payload = self.read_payload(entry, &header)?;
            return self.decode_column(&column, payload, header.row_count as usize);
        }
        Err(StoreError::UnknownColumn(name.to_owned()))
    }

    /// Read every column and materialize full rows keyed by column name.
    pub fn read_rows(&mut self) -> Result<Vec<Row>> {
        let (header, entries) = self.parse_preamble()?;
        let row_count = header.row_count as usize;
        debug!(
            columns = entries.len(),
            rows = row_count,
            "reading all columns"
        );

        let mut decoded = Vec::with_capacity(entries.len());
        for entry in &entries {
            let column = self.read_column_meta(entry)?;
            let payload = self.read_payload(entry, &header)?;
            let values = self.decode_column(&column, payload, row_count)?;
            decoded.push((column, values));
        }

        let mut rows = vec![Row::new(); row_count];
        for (column, values) in decoded {
            for (row, cell) in values.into_iter().enumerate() {
                rows[row].insert(column.name.clone(), cell);
            }
        }
        Ok(rows)
    }

    /// Parse the header and the full column index.
    fn parse_preamble(&mut self) -> Result<(FileHeader, Vec<ColumnIndexEntry>)> {
        self.source.seek(SeekFrom::Start(0))?;
        let mut buf = [0u8; HEADER_SIZE_V2];
        let available = read_at_most(&mut self.source, &mut buf)?;
        let mut slice = &buf[..available];
        let header = FileHeader::decode(&mut slice)?;
        if header.column_count == 0 {
            // A schema carries at least one column; a zero-column file
            // cannot have been produced by a writer.
            return Err(SchemaError::Empty.into());
        }

        // The index follows the header directly; entries are read one at a
        // time so a corrupt column count fails on EOF instead of a huge
        // allocation.
        self.source.seek(SeekFrom::Start(header.size() as u64))?;
        let mut entries = Vec::with_capacity(header.column_count.min(1024) as usize);
        let mut entry_buf = [0u8; INDEX_ENTRY_SIZE];
        for _ in 0..header.column_count {
            self.source.read_exact(&mut entry_buf)?;
            entries.push(ColumnIndexEntry::decode(&mut entry_buf.as_slice())?);
        }
        Ok((header, entries))
    }

    /// Parse one column's metadata block.
    fn read_column_meta(&mut self, entry: &ColumnIndexEntry) -> Result<Column> {
        self.source.seek(SeekFrom::Start(entry.metadata_offset))?;
        let mut len_buf = [0u8; 4];
        self.source.read_exact(&mut len_buf)?;
        let name_len = u32::from_be_bytes(len_buf) as usize;

        let mut rest = Vec::new();
        (&mut self.source)
            .take(name_len as u64 + 2)
            .read_to_end(&mut rest)?;

        let mut block = BytesMut::with_capacity(4 + rest.len());
        block.extend_from_slice(&len_buf);
        block.extend_from_slice(&rest);
        Ok(decode_column_meta(&mut block.freeze())?)
    }

    /// Read one column's stored payload and undo compression.
    fn read_payload(&mut self, entry: &ColumnIndexEntry, header: &FileHeader) -> Result<Vec<u8>> {
        self.source.seek(SeekFrom::Start(entry.data_offset))?;
        let mut size_buf = [0u8; 4];
        self.source.read_exact(&mut size_buf)?;
        let size = u32::from_be_bytes(size_buf) as usize;

        let mut stored = Vec::new();
        (&mut self.source).take(size as u64).read_to_end(&mut stored)?;
        if stored.len() < size {
            return Err(FormatError::Truncated {
                expected: size,
                actual: stored.len(),
            }
            .into());
        }
        Ok(decompress(header.compression, &stored)?)
    }

    /// Split a raw payload into bitmap and values, then decode in row order.
    fn decode_column(
        &self,
        column: &Column,
        payload: Vec<u8>,
        row_count: usize,
    ) -> Result<Vec<Option<Value>>> {
        let bitmap_len = NullBitmap::byte_len(row_count);
        let mut bytes = Bytes::from(payload);
        if bytes.len() < bitmap_len {
            return Err(FormatError::Truncated {
                expected: bitmap_len,
                actual: bytes.len(),
            }
            .into());
        }
        let bitmap_bytes = bytes.split_to(bitmap_len);
        let bitmap = NullBitmap::from_bytes(bitmap_bytes.to_vec(), row_count).ok_or(
            FormatError::Truncated {
                expected: bitmap_len,
                actual: 0,
            },
        )?;

        let mut values = Vec::with_capacity(row_count);
        for row in 0..row_count {
            if bitmap.is_null(row) {
                values.push(None);
                continue;
            }
            match decode_value(&mut bytes, column.ty) {
                Ok(value) => values.push(Some(value)),
                Err(ValueError::Truncated { .. })
                    if self.options.decode_mode == DecodeMode::Lenient =>
                {
                    warn!(
                        column = %column.name,
                        row,
                        "column payload exhausted early; padding remaining rows with nulls"
                    );
                    values.resize(row_count, None);
                    break;
                }
                Err(e) => return Err(FormatError::in_column(&column.name, e).into()),
            }
        }
        Ok(values)
    }
}

/// Fill as much of `buf` as the source can provide, returning the count.
fn read_at_most(source: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use bytes::BufMut;
    use colf_format::{ColumnChunk, column_meta_len, encode_column_meta};
    use colf_types::{ColumnType, Compression};

    use super::*;

    /// Assemble a single-column version 2 file in memory.
    fn single_column_file(column: &Column, cells: &[Option<Value>]) -> Vec<u8> {
        let chunk = ColumnChunk::build(column, cells, Compression::None).unwrap();
        let header = FileHeader::new(Compression::None, 1, cells.len() as u32);
        let metadata_offset = (header.size() + INDEX_ENTRY_SIZE) as u64;
        let data_offset = metadata_offset + column_meta_len(column) as u64;

        let mut buf = BytesMut::new();
        header.encode(&mut buf);
        ColumnIndexEntry::new(metadata_offset, data_offset, chunk.data_size()).encode(&mut buf);
        encode_column_meta(column, &mut buf);
        buf.put_u32(chunk.data_size());
        buf.put_slice(&chunk.payload);
        buf.to_vec()
    }

    #[test]
    fn test_read_column_from_cursor() {
        let column = Column::new("age", ColumnType::Int32).with_nullable(true);
        let cells = vec![Some(Value::Int32(30)), None, Some(Value::Int32(25))];
        let file = single_column_file(&column, &cells);

        let mut reader = Reader::new(Cursor::new(file));
        assert_eq!(reader.column_names().unwrap(), vec!["age"]);
        assert_eq!(reader.read_column("age").unwrap(), cells);
    }

    #[test]
    fn test_unknown_column() {
        let column = Column::new("age", ColumnType::Int32);
        let file = single_column_file(&column, &[Some(Value::Int32(1))]);
        let mut reader = Reader::new(Cursor::new(file));
        assert!(matches!(
            reader.read_column("height"),
            Err(StoreError::UnknownColumn(name)) if name == "height"
        ));
    }

    #[test]
    fn test_truncated_payload_strict() {
        let column = Column::new("age", ColumnType::Int32);
        let cells = vec![Some(Value::Int32(1)), Some(Value::Int32(2))];
        let mut file = single_column_file(&column, &cells);
        // Drop the last value's bytes but fix up the size prefix so the
        // payload itself parses short. The remaining payload is 5 bytes
        // (bitmap + one value), preceded by its 4-byte prefix.
        file.truncate(file.len() - 4);
        let prefix_at = file.len() - 9;
        file[prefix_at..prefix_at + 4].copy_from_slice(&5u32.to_be_bytes());

        let mut reader = Reader::new(Cursor::new(file));
        assert!(matches!(
            reader.read_column("age"),
            Err(StoreError::Format(FormatError::Column { .. }))
        ));
    }

    #[test]
    fn test_truncated_payload_lenient() {
        let column = Column::new("age", ColumnType::Int32);
        let cells = vec![Some(Value::Int32(1)), Some(Value::Int32(2))];
        let mut file = single_column_file(&column, &cells);
        file.truncate(file.len() - 4);
        let prefix_at = file.len() - 9;
        file[prefix_at..prefix_at + 4].copy_from_slice(&5u32.to_be_bytes());

        let mut reader = Reader::with_options(
            Cursor::new(file),
            ReaderOptions::new().decode_mode(DecodeMode::Lenient),
        );
        assert_eq!(
            reader.read_column("age").unwrap(),
            vec![Some(Value::Int32(1)), None]
        );
    }

    #[test]
    fn test_not_a_colf_file() {
        let mut reader = Reader::new(Cursor::new(b"PK\x03\x04not a column file".to_vec()));
        assert!(matches!(
            reader.read_rows(),
            Err(StoreError::Format(FormatError::InvalidMagic))
        ));
    }

    #[test]
    fn test_empty_source() {
        let mut reader = Reader::new(Cursor::new(Vec::new()));
        assert!(matches!(
            reader.column_names(),
            Err(StoreError::Format(FormatError::Truncated { .. }))
        ));
    }
}
