//! Instrumented IO double recording which byte ranges are read.

use std::io::{Read, Seek, SeekFrom};
use std::sync::{Arc, Mutex};

/// A shared log of `(offset, length)` ranges read through a
/// [`TrackingFile`].
#[derive(Debug, Clone, Default)]
pub struct ReadLog {
    ranges: Arc<Mutex<Vec<(u64, usize)>>>,
}

impl ReadLog {
    /// Snapshot of the recorded ranges in read order.
    #[must_use]
    #[allow(clippy::unwrap_used)] // lock poisoning aborts the test anyway
    pub fn ranges(&self) -> Vec<(u64, usize)> {
        self.ranges.lock().unwrap().clone()
    }

    /// Whether any recorded read overlaps `[start, end)`.
    #[must_use]
    pub fn touched(&self, start: u64, end: u64) -> bool {
        self.ranges()
            .iter()
            .any(|&(offset, len)| offset < end && offset + len as u64 > start)
    }

    /// Total number of bytes read.
    #[must_use]
    pub fn bytes_read(&self) -> usize {
        self.ranges().iter().map(|&(_, len)| len).sum()
    }

    #[allow(clippy::unwrap_used)] // lock poisoning aborts the test anyway
    fn record(&self, offset: u64, len: usize) {
        if len > 0 {
            self.ranges.lock().unwrap().push((offset, len));
        }
    }
}

/// A `Read + Seek` wrapper that records every byte range it serves.
///
/// Feed one to `colf_store::Reader::new` to verify which parts of a file an
/// operation actually touches.
#[derive(Debug)]
pub struct TrackingFile<R> {
    inner: R,
    position: u64,
    log: ReadLog,
}

impl<R: Read + Seek> TrackingFile<R> {
    /// Wrap a source, returning the wrapper and a handle to its log.
    pub fn new(mut inner: R) -> std::io::Result<(Self, ReadLog)> {
        let position = inner.stream_position()?;
        let log = ReadLog::default();
        Ok((
            Self {
                inner,
                position,
                log: log.clone(),
            },
            log,
        ))
    }
}

impl<R: Read> Read for TrackingFile<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.log.record(self.position, n);
        self.position += n as u64;
        Ok(n)
    }
}

impl<R: Seek> Seek for TrackingFile<R> {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.position = self.inner.seek(pos)?;
        Ok(self.position)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_ranges_recorded() {
        let data: Vec<u8> = (0..64).collect();
        let (mut file, log) = TrackingFile::new(Cursor::new(data)).unwrap();

        let mut buf = [0u8; 8];
        file.read_exact(&mut buf).unwrap();
        file.seek(SeekFrom::Start(32)).unwrap();
        file.read_exact(&mut buf).unwrap();

        assert_eq!(log.ranges(), vec![(0, 8), (32, 8)]);
        assert_eq!(log.bytes_read(), 16);
        assert!(log.touched(0, 8));
        assert!(log.touched(36, 40));
        assert!(!log.touched(8, 32));
        assert!(!log.touched(40, 64));
    }
}
