//! In-memory implementation of a character source.

use crate::Error;
use crate::cursor::Cursor;
use crate::traits::{CharSource, ClosableCharSource};

/// A character source over in-memory text.
///
/// The text is converted to UTF-16 code units once, at construction. The
/// primitive operations are O(1) after that, except
/// [`peek_ahead`](CharSource::peek_ahead), which is O(count).
///
/// # Example
///
/// ```ignore
/// let mut source = StringSource::new("line1\r\nline2");
/// assert_eq!(source.read_line(), "line1");
/// assert_eq!(source.read_line(), "line2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringSource {
    cursor: Cursor,
}

impl StringSource {
    /// Creates a source over `text`.
    pub fn new(text: &str) -> Self {
        Self {
            cursor: Cursor::new(text.encode_utf16().collect::<Vec<_>>()),
        }
    }

    /// Total length in UTF-16 code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor.len() == 0
    }
}

impl From<&str> for StringSource {
    #[inline]
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<&String> for StringSource {
    #[inline]
    fn from(text: &String) -> Self {
        Self::new(text)
    }
}

impl From<String> for StringSource {
    #[inline]
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

/// Absent text yields an empty source.
impl From<Option<&str>> for StringSource {
    #[inline]
    fn from(text: Option<&str>) -> Self {
        text.map(Self::new).unwrap_or_default()
    }
}

impl CharSource for StringSource {
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

/// Holds no resources; closing does nothing.
impl ClosableCharSource for StringSource {
    #[inline]
    fn close(&mut self) {}

    #[inline]
    fn is_closed(&self) -> bool {
        false
    }
}
