#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Fast sequential character access for hand-written parsers.
//!
//! `fission` re-exports the [`CharSource`] contract and both sources from
//! `fission-core` and adds path-based helpers that load, decode and wrap
//! failures into a single [`FileReadError`].
//!
//! ```ignore
//! use fission::CharSource;
//!
//! let text = fission::read_string("example.txt")?;
//! let lines = fission::read_lines("example.txt")?;
//!
//! let mut source = fission::chars_from_path("example.txt")?;
//! while source.has_next() {
//!     let ch = source.read_char();
//!     // ...
//! }
//! ```

mod error;
mod read;

pub use error::{FileReadError, Operation};
pub use fission_core::*;
pub use read::{
    chars, chars_from_path, chars_from_path_with, read_lines, read_lines_with, read_string,
    read_string_with,
};
