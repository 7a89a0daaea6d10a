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

pub mod config;
mod cursor;
pub mod encoding;
mod error;
mod file_source;
pub mod load;
mod string_source;
pub mod traits;

pub use config::LoadConfig;
pub use encoding::Encoding;
pub use error::Error;
pub use file_source::FileSource;
pub use string_source::StringSource;
pub use traits::{CharSource, ClosableCharSource};
