//! Tests for the path-based convenience functions.
//!
//! Paths are relative to the package root so that rendered error messages
//! are stable across machines.

use std::error::Error as _;

use fission::{CharSource, ClosableCharSource, Encoding, Operation};

const MISSING: &str = "tests/fixtures/does-not-exist.txt";

fn render_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

#[test]
fn test_read_string() {
    let text = fission::read_string("tests/fixtures/hello.txt").unwrap();
    assert_eq!(text, "Hello World");
}

#[test]
fn test_read_string_with_encoding() {
    let text = fission::read_string_with("tests/fixtures/latin1.txt", Encoding::Latin1).unwrap();
    assert_eq!(text, "Müller");
}

#[test]
fn test_read_string_empty_file() {
    assert_eq!(fission::read_string("tests/fixtures/empty.txt").unwrap(), "");
}

#[test]
fn test_read_lines_mixed_endings() {
    let lines = fission::read_lines("tests/fixtures/lines.txt").unwrap();
    assert_eq!(lines, ["Line 1", "Line 2", "Line 3", "Line 4"]);
}

#[test]
fn test_read_lines_empty_file() {
    let lines = fission::read_lines("tests/fixtures/empty.txt").unwrap();
    assert!(lines.is_empty());
}

#[test]
fn test_read_lines_with_encoding() {
    let lines = fission::read_lines_with("tests/fixtures/utf16_bom.txt", Encoding::Utf16).unwrap();
    assert_eq!(lines, ["hi"]);
}

#[test]
fn test_chars_from_string() {
    let mut source = fission::chars("test content");
    assert_eq!(source.read_while(|_| true), "test content");

    let mut source = fission::chars(String::from("owned"));
    assert_eq!(source.read_until(u16::from(b'n')), "ow");

    let mut source = fission::chars(None::<&str>);
    assert!(!source.has_next());
    assert_eq!(source.read(), None);
}

#[test]
fn test_chars_from_path() {
    let mut source = fission::chars_from_path("tests/fixtures/hello.txt").unwrap();
    assert_eq!(source.read_while(|_| true), "Hello World");
    source.close();
    assert!(!source.has_next());

    let mut source =
        fission::chars_from_path_with("tests/fixtures/latin1.txt", Encoding::Latin1).unwrap();
    assert_eq!(source.read_while(|_| true), "Müller");

    let source = fission::chars_from_path("tests/fixtures/empty.txt").unwrap();
    assert!(!source.has_next());
}

#[test]
fn test_missing_file_errors() {
    let err = fission::read_string(MISSING).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.operation(), Operation::ReadString);
    insta::assert_snapshot!(
        render_chain(&err),
        @"failed to read tests/fixtures/does-not-exist.txt: file not found: tests/fixtures/does-not-exist.txt"
    );

    let err = fission::read_lines(MISSING).unwrap_err();
    assert_eq!(err.operation(), Operation::ReadLines);
    insta::assert_snapshot!(
        render_chain(&err),
        @"failed to read lines from tests/fixtures/does-not-exist.txt: file not found: tests/fixtures/does-not-exist.txt"
    );

    let err = fission::chars_from_path(MISSING).unwrap_err();
    assert_eq!(err.operation(), Operation::OpenSource);
    assert_eq!(err.path(), std::path::Path::new(MISSING));
    insta::assert_snapshot!(
        render_chain(&err),
        @"failed to open char source for tests/fixtures/does-not-exist.txt: file not found: tests/fixtures/does-not-exist.txt"
    );
}

#[test]
fn test_decode_error_is_wrapped() {
    let err = fission::read_string("tests/fixtures/invalid_utf8.txt").unwrap_err();
    assert!(!err.is_not_found());
    assert!(err.inner().is_read_failure());
    assert!(err.source().is_some());
    insta::assert_snapshot!(
        render_chain(&err),
        @"failed to read tests/fixtures/invalid_utf8.txt: invalid UTF-8 input at byte offset 2"
    );

    let inner = err.into_inner();
    assert!(matches!(inner, fission::Error::Decode { offset: 2, .. }));
}
