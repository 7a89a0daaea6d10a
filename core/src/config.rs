//! Load configuration for file-backed sources.
//!
//! This module provides [`LoadConfig`] for controlling how a file is turned
//! into an in-memory character buffer: which [`Encoding`] decodes it and how
//! large a file may be before loading is refused.
//!
//! # Example
//!
//! ```ignore
//! use fission_core::{Encoding, FileSource, LoadConfig};
//!
//! // UTF-8, no limit beyond what the platform can allocate
//! let config = LoadConfig::default();
//!
//! // Latin-1 files of at most 1 MiB
//! let config = LoadConfig::new()
//!     .with_encoding(Encoding::Latin1)
//!     .with_max_file_size(1 << 20);
//!
//! let source = FileSource::open_with("settings.ini", &config)?;
//! ```

use crate::encoding::Encoding;

/// Configuration for loading a file into a character buffer.
///
/// # Default Values
///
/// | Setting | Default | Rationale |
/// |---------|---------|-----------|
/// | `encoding` | `Encoding::Utf8` | Default for every convenience entry point |
/// | `max_file_size` | `isize::MAX` | Largest buffer a `Vec` can hold |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadConfig {
    /// Encoding used to decode the file bytes.
    pub encoding: Encoding,

    /// Maximum accepted file size in bytes.
    ///
    /// Files larger than this fail with
    /// [`Error::TooLarge`](crate::Error::TooLarge) before any byte is read.
    pub max_file_size: u64,
}

impl Default for LoadConfig {
    /// Returns the default configuration.
    ///
    /// - `encoding`: UTF-8
    /// - `max_file_size`: `isize::MAX`
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl LoadConfig {
    /// Largest file size any configuration accepts.
    pub const MAX_BUFFER_SIZE: u64 = isize::MAX as u64;

    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        encoding: Encoding::Utf8,
        max_file_size: Self::MAX_BUFFER_SIZE,
    };

    /// Creates a new configuration with default values.
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the encoding.
    #[inline]
    pub const fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the maximum file size in bytes.
    ///
    /// Values above [`LoadConfig::MAX_BUFFER_SIZE`] are clamped to it.
    #[inline]
    pub const fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = if bytes > Self::MAX_BUFFER_SIZE {
            Self::MAX_BUFFER_SIZE
        } else {
            bytes
        };
        self
    }

    /// Removes the size limit, leaving only the platform maximum.
    #[inline]
    pub const fn without_size_limit(self) -> Self {
        self.with_max_file_size(Self::MAX_BUFFER_SIZE)
    }
}

impl From<Encoding> for LoadConfig {
    #[inline]
    fn from(encoding: Encoding) -> Self {
        Self::DEFAULT.with_encoding(encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_defaults() {
        let config = LoadConfig::default();
        assert_eq!(config.encoding, Encoding::Utf8);
        assert_eq!(config.max_file_size, isize::MAX as u64);
    }

    #[test]
    fn test_load_config_builder() {
        let config = LoadConfig::new()
            .with_encoding(Encoding::Latin1)
            .with_max_file_size(1024);

        assert_eq!(config.encoding, Encoding::Latin1);
        assert_eq!(config.max_file_size, 1024);
    }

    #[test]
    fn test_load_config_clamps_size() {
        let config = LoadConfig::new().with_max_file_size(u64::MAX);
        assert_eq!(config.max_file_size, LoadConfig::MAX_BUFFER_SIZE);
    }

    #[test]
    fn test_load_config_without_limit() {
        let config = LoadConfig::new()
            .with_max_file_size(16)
            .without_size_limit();
        assert_eq!(config.max_file_size, LoadConfig::MAX_BUFFER_SIZE);
    }

    #[test]
    fn test_load_config_from_encoding() {
        let config = LoadConfig::from(Encoding::Utf16Le);
        assert_eq!(config.encoding, Encoding::Utf16Le);
        assert_eq!(config.max_file_size, LoadConfig::MAX_BUFFER_SIZE);
    }
}
