//! Path-based entry points.
//!
//! Each function comes in two flavours: one decoding UTF-8 and a `_with`
//! variant taking an explicit [`Encoding`]. Every failure is reported as a
//! [`FileReadError`].

use std::path::Path;

use fission_core::{CharSource, Encoding, FileSource, LoadConfig, StringSource, load};

use crate::error::{FileReadError, Operation};

const CR: u16 = b'\r' as u16;
const LF: u16 = b'\n' as u16;

/// Reads the whole file at `path` as UTF-8.
#[inline]
pub fn read_string<P: AsRef<Path>>(path: P) -> Result<String, FileReadError> {
    read_string_with(path, Encoding::Utf8)
}

/// Reads the whole file at `path`, decoding it with `encoding`.
///
/// # Errors
///
/// Fails if the file does not exist, is too large to hold in memory, cannot
/// be read, or is not valid in `encoding`.
pub fn read_string_with<P: AsRef<Path>>(
    path: P,
    encoding: Encoding,
) -> Result<String, FileReadError> {
    let path = path.as_ref();
    load::read_to_string(path, &LoadConfig::from(encoding))
        .map_err(|err| FileReadError::new(Operation::ReadString, path, err))
}

/// Reads all lines of the UTF-8 file at `path`.
#[inline]
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, FileReadError> {
    read_lines_with(path, Encoding::Utf8)
}

/// Reads all lines of the file at `path`, decoding it with `encoding`.
///
/// Lines end at `\n`, `\r` or `\r\n`; terminators are not included. A
/// terminator at the very end does not start another, empty line, so an
/// empty file has no lines at all.
pub fn read_lines_with<P: AsRef<Path>>(
    path: P,
    encoding: Encoding,
) -> Result<Vec<String>, FileReadError> {
    let path = path.as_ref();
    let text = load::read_to_string(path, &LoadConfig::from(encoding))
        .map_err(|err| FileReadError::new(Operation::ReadLines, path, err))?;
    Ok(split_lines(&text))
}

/// Opens a [`FileSource`] over the UTF-8 file at `path`.
#[inline]
pub fn chars_from_path<P: AsRef<Path>>(path: P) -> Result<FileSource, FileReadError> {
    chars_from_path_with(path, Encoding::Utf8)
}

/// Opens a [`FileSource`] over the file at `path`, decoding it with `encoding`.
pub fn chars_from_path_with<P: AsRef<Path>>(
    path: P,
    encoding: Encoding,
) -> Result<FileSource, FileReadError> {
    let path = path.as_ref();
    FileSource::open(path, encoding)
        .map_err(|err| FileReadError::new(Operation::OpenSource, path, err))
}

/// Creates a [`StringSource`] over `text`. Never fails; accepts `&str`,
/// `String` and `Option<&str>`, where `None` gives an empty source.
///
/// ```ignore
/// let mut source = fission::chars("version = 2");
/// assert!(source.starts_with("version"));
/// ```
#[inline]
pub fn chars<T: Into<StringSource>>(text: T) -> StringSource {
    text.into()
}

fn split_lines(text: &str) -> Vec<String> {
    let mut source = StringSource::new(text);
    let mut lines = Vec::new();
    while source.has_next() {
        lines.push(source.read_while(|unit| unit != LF && unit != CR));
        // stopped on a terminator or at the end
        if source.read() == Some(CR) {
            source.consume("\n");
        }
    }
    lines
}
