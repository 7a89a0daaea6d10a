//! File-backed implementation of a character source.
//!
//! This module provides [`FileSource`], which loads and decodes a whole file
//! into memory when it is opened. No file handle is held afterwards, so reads
//! never touch the disk and never fail.

use std::path::{Path, PathBuf};

use crate::cursor::Cursor;
use crate::encoding::Encoding;
use crate::traits::{CharSource, ClosableCharSource};
use crate::{Error, LoadConfig, load};

/// A character source over the decoded content of a file.
///
/// Opening either produces a source holding the complete decoded buffer or
/// fails; there is no partially loaded state.
///
/// # Example
///
/// ```ignore
/// let mut source = FileSource::open("settings.ini", Encoding::Utf8)?;
/// while source.has_next() {
///     let line = source.read_line();
///     // ...
/// }
/// source.close();
/// ```
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    cursor: Cursor,
    closed: bool,
}

impl FileSource {
    /// Opens the file at `path` and decodes it with `encoding`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the path does not exist
    /// - [`Error::TooLarge`] if the file cannot be held in memory
    /// - [`Error::Io`] or [`Error::Decode`] if reading or decoding fails
    pub fn open<P: AsRef<Path>>(path: P, encoding: Encoding) -> Result<Self, Error> {
        Self::open_with(path, &LoadConfig::from(encoding))
    }

    /// Opens the file at `path` using the encoding and size limit of `config`.
    ///
    /// # Errors
    ///
    /// Same as [`FileSource::open`], with [`Error::TooLarge`] raised against
    /// `config.max_file_size`.
    pub fn open_with<P: AsRef<Path>>(path: P, config: &LoadConfig) -> Result<Self, Error> {
        let path = path.as_ref();
        let units = load::read_to_units(path, config)?;
        Ok(Self {
            path: path.to_path_buf(),
            cursor: Cursor::new(units),
            closed: false,
        })
    }

    /// Path the source was loaded from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Length of the decoded buffer in UTF-16 code units, `0` once closed.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor.len() == 0
    }
}

impl CharSource for FileSource {
    #[inline(always)]
    fn read(&mut self) -> Option<u16> {
        self.cursor.read()
    }

    #[inline(always)]
    fn peek(&self) -> Option<u16> {
        self.cursor.peek()
    }

    #[inline]
    fn peek_ahead(&self, count: usize) -> Vec<Option<u16>> {
        self.cursor.peek_ahead(count)
    }

    #[inline]
    fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    #[inline]
    fn position(&self) -> usize {
        self.cursor.position()
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    #[inline]
    fn mark(&mut self) {
        self.cursor.mark();
    }

    #[inline]
    fn reset(&mut self) -> Result<(), Error> {
        self.cursor.reset()
    }

    #[inline]
    fn commit(&mut self) -> Result<(), Error> {
        self.cursor.commit()
    }
}

impl ClosableCharSource for FileSource {
    /// Drops the decoded buffer. Later reads see end of input at the
    /// position reached before closing.
    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.cursor.release();
        self.closed = true;
    }

    #[inline]
    fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn test_open_reads_whole_file() {
        let mut source = FileSource::open(fixture("hello.txt"), Encoding::Utf8).unwrap();
        assert_eq!(source.len(), 11);
        assert_eq!(source.path(), fixture("hello.txt"));
        assert_eq!(source.read_until(u16::from(b'\0')), "Hello World");
    }

    #[test]
    fn test_open_missing_file() {
        let err = FileSource::open(fixture("nope.txt"), Encoding::Utf8).unwrap_err();
        assert!(matches!(err, Error::NotFound { path } if path.ends_with("nope.txt")));
    }

    #[test]
    fn test_open_empty_file() {
        let mut source = FileSource::open(fixture("empty.txt"), Encoding::Utf8).unwrap();
        assert!(source.is_empty());
        assert!(!source.has_next());
        assert_eq!(source.read(), None);
    }

    #[test]
    fn test_open_respects_size_limit() {
        let config = LoadConfig::new().with_max_file_size(10);
        let err = FileSource::open_with(fixture("hello.txt"), &config).unwrap_err();
        assert!(matches!(err, Error::TooLarge { size: 11, limit: 10 }));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut source = FileSource::open(fixture("hello.txt"), Encoding::Utf8).unwrap();
        source.read();
        source.mark();
        source.read();
        assert!(!source.is_closed());

        source.close();
        source.close();

        assert!(source.is_closed());
        assert!(!source.has_next());
        assert_eq!(source.read(), None);
        assert_eq!(source.peek_ahead(2), vec![None, None]);
        assert!(source.reset().is_err());
        assert_eq!(source.len(), 0);
        assert_eq!(source.position(), 2);
    }
}
