//! Core traits for fission character sources.
//!
//! # Trait Hierarchy
//!
//! ```text
//! CharSource (read / peek / lookahead / mark-reset)
//!     ├── read_while, read_until, read_line
//!     ├── skip_whitespace
//!     ├── starts_with, consume
//!     └── ClosableCharSource (explicit close)
//! ```
//!
//! # Usage Patterns
//!
//! ## Lookahead
//!
//! ```ignore
//! use fission_core::CharSource;
//!
//! fn parse_value(source: &mut impl CharSource) -> Value {
//!     if source.consume("true") {
//!         Value::Bool(true)
//!     } else if source.consume("false") {
//!         Value::Bool(false)
//!     } else {
//!         Value::Text(source.read_line())
//!     }
//! }
//! ```
//!
//! ## Backtracking
//!
//! ```ignore
//! source.mark();
//! let word = source.read_while(|u| (u as u8).is_ascii_alphabetic());
//! if word.len() < 3 {
//!     source.reset()?; // go back and try another production
//! } else {
//!     source.commit()?;
//! }
//! ```

mod char_source;
mod closable;

pub use char_source::CharSource;
pub use closable::ClosableCharSource;
