use crate::Error;

/// A sequential source of UTF-16 code units for hand-written parsers.
///
/// Provides the core interface every cursor implements, regardless of where
/// its characters came from. Sources support peeking, multi-unit lookahead
/// and a single level of mark/reset backtracking.
///
/// Positions count UTF-16 code units, so a character outside the Basic
/// Multilingual Plane occupies two positions and is produced by two calls to
/// [`read`](CharSource::read). End of input is reported as `None`.
///
/// # Required Methods
///
/// `read`, `peek`, `peek_ahead`, `has_next`, `position`, `remaining`,
/// `mark`, `reset` and `commit` are implemented per source.
///
/// # Provided Methods
///
/// The parsing helpers (`read_while`, `read_until`, `read_line`,
/// `skip_whitespace`, `starts_with`, `consume`, `read_char`) are built only
/// on the required methods.
///
/// # Example
///
/// ```ignore
/// use fission_core::{CharSource, StringSource};
///
/// let mut source = StringSource::new("key = \"value\"");
/// let key = source.read_while(|u| (u as u8).is_ascii_alphabetic());
/// source.skip_whitespace();
/// source.consume("=");
/// source.skip_whitespace();
/// if source.consume("\"") {
///     let value = source.read_until(u16::from(b'"'));
/// }
/// ```
///
/// # Thread Safety
///
/// Sources are plain single-owner values; every mutating method takes
/// `&mut self`. Wrap a source in a lock to share it across threads.
pub trait CharSource {
    /// Consumes and returns the unit at the current position.
    ///
    /// Returns `None` at end of input, leaving the position unchanged.
    fn read(&mut self) -> Option<u16>;

    /// Returns the unit at the current position without consuming it.
    ///
    /// Repeated calls return the same value until the position changes.
    fn peek(&self) -> Option<u16>;

    /// Returns exactly `count` entries starting at the current position.
    ///
    /// Entry `i` holds the unit at `position() + i`, or `None` when that index
    /// lies past the end. Never advances the position.
    fn peek_ahead(&self, count: usize) -> Vec<Option<u16>>;

    /// Returns `true` if [`read`](CharSource::read) would produce a unit.
    fn has_next(&self) -> bool;

    /// Returns the current 0-based position in code units.
    fn position(&self) -> usize;

    /// Returns the number of units left before the end of input.
    fn remaining(&self) -> usize;

    /// Marks the current position, discarding any previous mark.
    fn mark(&mut self);

    /// Restores the position to the mark. The mark stays set, so repeated
    /// resets return to the same place.
    ///
    /// Returns `Err(Error::InvalidState)` if no mark is set.
    fn reset(&mut self) -> Result<(), Error>;

    /// Clears the mark, keeping the current position.
    ///
    /// Returns `Err(Error::InvalidState)` if no mark is set.
    fn commit(&mut self) -> Result<(), Error>;

    /// Reads one unit as a `char`.
    ///
    /// End of input yields `'\0'`. A surrogate unit, which is only half of a
    /// character, yields [`char::REPLACEMENT_CHARACTER`].
    #[inline]
    fn read_char(&mut self) -> char {
        match self.read() {
            Some(unit) => char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER),
            None => '\0',
        }
    }

    /// Consumes units while `predicate` accepts them.
    ///
    /// The first rejected unit is left unconsumed. Returns an empty string if
    /// nothing matched. A surrogate pair split by the predicate is rendered
    /// with replacement characters.
    ///
    /// ```ignore
    /// let digits = source.read_while(|u| (b'0' as u16..=b'9' as u16).contains(&u));
    /// ```
    fn read_while<F>(&mut self, mut predicate: F) -> String
    where
        F: FnMut(u16) -> bool,
    {
        let mut units = Vec::new();
        while let Some(unit) = self.peek() {
            if !predicate(unit) {
                break;
            }
            self.read();
            units.push(unit);
        }
        String::from_utf16_lossy(&units)
    }

    /// Consumes units up to, but not including, `delimiter`.
    ///
    /// Reaching the end of input without finding the delimiter is not an
    /// error; everything that was left is returned.
    #[inline]
    fn read_until(&mut self, delimiter: u16) -> String {
        self.read_while(|unit| unit != delimiter)
    }

    /// Reads one line, consuming its `\n` terminator.
    ///
    /// A `\r` directly before the consumed `\n` is dropped as well, so both
    /// `\n` and `\r\n` endings work. A trailing `\r` with no `\n` after it is
    /// returned as part of the line.
    fn read_line(&mut self) -> String {
        let mut line = self.read_until(LF);
        if self.peek() == Some(LF) {
            self.read();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        line
    }

    /// Skips whitespace.
    ///
    /// Every Unicode space separator counts except the no-break spaces
    /// (`U+00A0`, `U+2007`, `U+202F`), as do `U+2028`, `U+2029`, the ASCII
    /// controls `\t`, `\n`, `\u{0B}`, `\u{0C}`, `\r` and the information
    /// separators `U+001C`..=`U+001F`.
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.read();
        }
    }

    /// Checks whether the input at the current position starts with `prefix`.
    ///
    /// An empty prefix always matches. Never advances the position.
    fn starts_with(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return true;
        }
        let expected = prefix.encode_utf16();
        let ahead = self.peek_ahead(expected.clone().count());
        ahead
            .into_iter()
            .zip(expected)
            .all(|(actual, expected)| actual == Some(expected))
    }

    /// Consumes `literal` if the input at the current position starts with it.
    ///
    /// Returns `false` and leaves the position unchanged otherwise.
    fn consume(&mut self, literal: &str) -> bool {
        if !self.starts_with(literal) {
            return false;
        }
        for _ in literal.encode_utf16() {
            self.read();
        }
        true
    }
}

const LF: u16 = b'\n' as u16;

#[inline]
fn is_whitespace(unit: u16) -> bool {
    match unit {
        0x09..=0x0D | 0x1C..=0x1F => true,
        0x85 | 0xA0 | 0x2007 | 0x202F => false,
        _ => char::from_u32(u32::from(unit)).is_some_and(char::is_whitespace),
    }
}
