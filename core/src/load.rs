//! Whole-file loading into decoded buffers.
//!
//! The loader either produces the complete decoded content of a file or an
//! error; no partially read buffer is ever returned. The file handle is
//! closed before any of these functions return.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use crate::{Error, LoadConfig};

/// Reads the raw bytes of the file at `path`.
///
/// Checks run in this order:
///
/// 1. the path must exist ([`Error::NotFound`]);
/// 2. its size must not exceed `max_file_size` ([`Error::TooLarge`]);
/// 3. a zero-length file returns an empty buffer without opening it;
/// 4. otherwise the content is read in one bounded pass ([`Error::Io`]).
pub fn read_bytes(path: &Path, max_file_size: u64) -> Result<Vec<u8>, Error> {
    let io_error = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(io_error(err)),
    };

    if metadata.is_dir() {
        return Err(io_error(io::ErrorKind::IsADirectory.into()));
    }

    let size = metadata.len();
    let too_large = Error::TooLarge {
        size,
        limit: max_file_size,
    };
    if size > max_file_size {
        return Err(too_large);
    }
    if size == 0 {
        return Ok(Vec::new());
    }
    let capacity = usize::try_from(size).map_err(|_| too_large)?;

    let file = File::open(path).map_err(io_error)?;
    let mut bytes = Vec::with_capacity(capacity);
    // bounded by the size observed above in case the file grows meanwhile
    file.take(size)
        .read_to_end(&mut bytes)
        .map_err(io_error)?;

    Ok(bytes)
}

/// Loads and decodes the file at `path` into UTF-16 code units.
pub fn read_to_units(path: &Path, config: &LoadConfig) -> Result<Vec<u16>, Error> {
    let bytes = read_bytes(path, config.max_file_size)?;
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    config.encoding.decode_utf16(&bytes)
}

/// Loads and decodes the file at `path` into a `String`.
pub fn read_to_string(path: &Path, config: &LoadConfig) -> Result<String, Error> {
    let bytes = read_bytes(path, config.max_file_size)?;
    if bytes.is_empty() {
        return Ok(String::new());
    }
    config.encoding.decode(&bytes)
}
