#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Config Reader Example
//!
//! This example demonstrates a hand-written configuration reader on top of
//! fission's `CharSource`. It supports a small TOML-like subset:
//! - `# comments`, on their own line or after a value
//! - `[section]` headers
//! - `key = value` pairs with bare keys
//! - basic strings with `\"`, `\\`, `\n`, `\r` and `\t` escapes
//! - integers, booleans and (nested) arrays

use std::fmt;
use std::path::Path;

use fission::{CharSource, ClosableCharSource};
use thiserror::Error;

// ANCHOR: error_type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("expected {expect} at position {position}, found {found}")]
    Expected {
        expect: &'static str,
        found: String,
        position: usize,
    },

    #[error("expected {expect} at position {position}, found EOF")]
    Empty {
        expect: &'static str,
        position: usize,
    },

    #[error("unclosed string starting at position {position}")]
    UnclosedString { position: usize },

    #[error("integer out of range at position {position}: {digits}")]
    IntegerOutOfRange { digits: String, position: usize },

    #[error("duplicate key `{key}`")]
    DuplicateKey { key: String },

    #[error(transparent)]
    Read(#[from] fission::FileReadError),

    #[error(transparent)]
    Source(#[from] fission::Error),
}
// ANCHOR_END: error_type

// ANCHOR: ast
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Integer(i64),
    Boolean(bool),
    Array(Vec<Value>),
}

/// Ordered `key = value` entries.
pub type Table = Vec<(String, Value)>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Entries before the first section header.
    pub root: Table,
    /// Sections in file order.
    pub sections: Vec<(String, Table)>,
}
// ANCHOR_END: ast

impl Document {
    /// Looks up `key` in `section`, or in the root table for `None`.
    pub fn get(&self, section: Option<&str>, key: &str) -> Option<&Value> {
        let table = match section {
            None => &self.root,
            Some(name) => {
                &self
                    .sections
                    .iter()
                    .find(|(section, _)| section == name)?
                    .1
            }
        };
        table.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

const fn unit(b: u8) -> u16 {
    b as u16
}

const HASH: u16 = unit(b'#');
const LBRACKET: u16 = unit(b'[');
const QUOTE: u16 = unit(b'"');

fn is_bare_key(u: u16) -> bool {
    u8::try_from(u).is_ok_and(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

fn is_digit(u: u16) -> bool {
    u8::try_from(u).is_ok_and(|b| b.is_ascii_digit())
}

fn is_inline_space(u: u16) -> bool {
    u == unit(b' ') || u == unit(b'\t')
}

fn unexpected<S: CharSource>(source: &S, expect: &'static str) -> ConfigError {
    let position = source.position();
    match source.peek() {
        None => ConfigError::Empty { expect, position },
        Some(u) => ConfigError::Expected {
            expect,
            found: format!("`{}`", String::from_utf16_lossy(&[u]).escape_debug()),
            position,
        },
    }
}

fn expect<S: CharSource>(source: &mut S, literal: &'static str) -> Result<(), ConfigError> {
    if source.consume(literal) {
        Ok(())
    } else {
        Err(unexpected(source, literal))
    }
}

fn skip_inline_space<S: CharSource>(source: &mut S) {
    source.read_while(is_inline_space);
}

/// Accepts trailing space, an optional comment and the line terminator.
fn end_of_line<S: CharSource>(source: &mut S) -> Result<(), ConfigError> {
    skip_inline_space(source);
    if !source.has_next() || source.consume("\n") || source.consume("\r\n") {
        return Ok(());
    }
    if source.peek() == Some(HASH) {
        source.read_line();
        return Ok(());
    }
    Err(unexpected(source, "end of line"))
}

fn parse_key<S: CharSource>(source: &mut S, what: &'static str) -> Result<String, ConfigError> {
    let key = source.read_while(is_bare_key);
    if key.is_empty() {
        return Err(unexpected(source, what));
    }
    Ok(key)
}

fn parse_string<S: CharSource>(source: &mut S) -> Result<String, ConfigError> {
    let position = source.position();
    expect(source, "\"")?;

    let mut units = Vec::new();
    loop {
        match source.read() {
            None => return Err(ConfigError::UnclosedString { position }),
            Some(QUOTE) => break,
            Some(u) if u == unit(b'\n') => return Err(ConfigError::UnclosedString { position }),
            Some(u) if u == unit(b'\\') => {
                let escaped = match source.peek().and_then(|u| u8::try_from(u).ok()) {
                    Some(b'"') => b'"',
                    Some(b'\\') => b'\\',
                    Some(b'n') => b'\n',
                    Some(b'r') => b'\r',
                    Some(b't') => b'\t',
                    _ => return Err(unexpected(source, "escape sequence")),
                };
                source.read();
                units.push(u16::from(escaped));
            }
            Some(u) => units.push(u),
        }
    }
    Ok(String::from_utf16_lossy(&units))
}

fn parse_integer<S: CharSource>(source: &mut S) -> Result<i64, ConfigError> {
    let position = source.position();
    source.mark();
    let sign = if source.consume("-") {
        "-"
    } else {
        source.consume("+");
        ""
    };
    let digits = source.read_while(is_digit);
    if digits.is_empty() {
        source.reset()?;
        return Err(unexpected(source, "integer"));
    }
    source.commit()?;

    let digits = format!("{sign}{digits}");
    digits
        .parse()
        .map_err(|_| ConfigError::IntegerOutOfRange { digits, position })
}

fn parse_array<S: CharSource>(source: &mut S) -> Result<Vec<Value>, ConfigError> {
    expect(source, "[")?;
    let mut items = Vec::new();
    loop {
        source.skip_whitespace();
        if source.consume("]") {
            return Ok(items);
        }
        items.push(parse_value(source)?);
        source.skip_whitespace();
        if source.consume("]") {
            return Ok(items);
        }
        if !source.consume(",") {
            return Err(unexpected(source, "`,` or `]`"));
        }
    }
}

fn parse_value<S: CharSource>(source: &mut S) -> Result<Value, ConfigError> {
    match source.peek() {
        Some(QUOTE) => parse_string(source).map(Value::String),
        Some(LBRACKET) => parse_array(source).map(Value::Array),
        Some(u) if is_digit(u) || u == unit(b'-') || u == unit(b'+') => {
            parse_integer(source).map(Value::Integer)
        }
        _ => {
            // backtrack so the error points at the start of the word
            source.mark();
            let value = match source.read_while(is_bare_key).as_str() {
                "true" => Value::Boolean(true),
                "false" => Value::Boolean(false),
                _ => {
                    source.reset()?;
                    return Err(unexpected(source, "value"));
                }
            };
            source.commit()?;
            Ok(value)
        }
    }
}

fn insert(table: &mut Table, key: String, value: Value) -> Result<(), ConfigError> {
    if table.iter().any(|(k, _)| *k == key) {
        return Err(ConfigError::DuplicateKey { key });
    }
    table.push((key, value));
    Ok(())
}

/// Parses a whole document from `source`.
pub fn parse<S: CharSource>(source: &mut S) -> Result<Document, ConfigError> {
    let mut doc = Document::default();

    loop {
        source.skip_whitespace();
        match source.peek() {
            None => return Ok(doc),
            Some(HASH) => {
                source.read_line();
            }
            Some(LBRACKET) => {
                source.read();
                skip_inline_space(source);
                let name = parse_key(source, "section name")?;
                skip_inline_space(source);
                expect(source, "]")?;
                end_of_line(source)?;
                doc.sections.push((name, Table::new()));
            }
            Some(_) => {
                let key = parse_key(source, "key")?;
                skip_inline_space(source);
                expect(source, "=")?;
                skip_inline_space(source);
                let value = parse_value(source)?;
                end_of_line(source)?;

                let table = match doc.sections.last_mut() {
                    Some((_, table)) => table,
                    None => &mut doc.root,
                };
                insert(table, key, value)?;
            }
        }
    }
}

/// Parses a document held in memory.
pub fn parse_str(text: &str) -> Result<Document, ConfigError> {
    parse(&mut fission::chars(text))
}

/// Loads and parses the UTF-8 file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document, ConfigError> {
    let mut source = fission::chars_from_path(path)?;
    let doc = parse(&mut source);
    source.close();
    doc
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => {
                f.write_str("\"")?;
                for ch in s.chars() {
                    match ch {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        ch => write!(f, "{ch}")?,
                    }
                }
                f.write_str("\"")
            }
            Value::Integer(i) => write!(f, "{i}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Display for Document {
    /// Renders the document in canonical form: one entry per line, a blank
    /// line before every section header.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.root {
            writeln!(f, "{key} = {value}")?;
        }
        for (i, (name, table)) in self.sections.iter().enumerate() {
            if i > 0 || !self.root.is_empty() {
                writeln!(f)?;
            }
            writeln!(f, "[{name}]")?;
            for (key, value) in table {
                writeln!(f, "{key} = {value}")?;
            }
        }
        Ok(())
    }
}
