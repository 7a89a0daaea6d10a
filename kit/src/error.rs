//! Error type of the path-based convenience functions.

use core::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// What a convenience function was doing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// [`read_string`](crate::read_string) and friends.
    ReadString,
    /// [`read_lines`](crate::read_lines) and friends.
    ReadLines,
    /// [`chars_from_path`](crate::chars_from_path) and friends.
    OpenSource,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::ReadString => "read",
            Operation::ReadLines => "read lines from",
            Operation::OpenSource => "open char source for",
        })
    }
}

/// The single error kind returned by the convenience layer.
///
/// Wraps the underlying [`fission_core::Error`] (missing file, oversized file,
/// I/O or decode failure) together with the path and the failed operation.
///
/// ```ignore
/// match fission::read_string("missing.txt") {
///     Err(err) if err.is_not_found() => { /* fall back to defaults */ }
///     Err(err) => return Err(err.into()),
///     Ok(text) => { /* ... */ }
/// }
/// ```
#[derive(Error, Debug)]
#[error("failed to {operation} {}", path.display())]
pub struct FileReadError {
    operation: Operation,
    path: PathBuf,
    #[source]
    source: fission_core::Error,
}

impl FileReadError {
    pub(crate) fn new(operation: Operation, path: &Path, source: fission_core::Error) -> Self {
        Self {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }

    #[inline]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying core error.
    #[inline]
    pub fn inner(&self) -> &fission_core::Error {
        &self.source
    }

    #[inline]
    pub fn into_inner(self) -> fission_core::Error {
        self.source
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self.source, fission_core::Error::NotFound { .. })
    }
}
