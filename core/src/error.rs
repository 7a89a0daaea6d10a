//! Core error types for fission.
//!
//! Every fallible operation in `fission-core` returns [`Error`]. The facade
//! crate wraps these in its own `FileReadError` for the path-based
//! convenience functions.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::Encoding;

/// Core fission error type.
///
/// `NotFound`, `TooLarge`, `Io` and `Decode` are environment-dependent and can
/// only arise while a file buffer is being loaded. `InvalidState` signals a
/// misuse of the mark protocol on an already constructed source.
#[derive(Error, Debug)]
pub enum Error {
    /// The path does not reference an existing file.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The file is larger than the configured maximum buffer size.
    ///
    /// The limit defaults to the largest allocation the platform can
    /// represent and can be lowered through [`LoadConfig`](crate::LoadConfig).
    #[error("file too large: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge {
        /// Size of the file on disk, in bytes.
        size: u64,
        /// Maximum accepted size, in bytes.
        limit: u64,
    },

    /// A lower-level I/O operation failed while loading a file.
    #[error("failed to read {}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bytes are not valid in the requested encoding.
    #[error("invalid {encoding} input at byte offset {offset}")]
    Decode {
        /// Encoding the bytes were decoded with.
        encoding: Encoding,
        /// Offset of the first byte that could not be decoded.
        offset: usize,
    },

    /// `reset()` or `commit()` was called without a live mark.
    #[error("no mark set")]
    InvalidState,

    /// An encoding label did not name a supported encoding.
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),
}

impl Error {
    /// Returns `true` for the errors that describe a failure to read or decode
    /// file content, as opposed to a missing or oversized file.
    #[inline]
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Error::Io { .. } | Error::Decode { .. })
    }
}
