#![no_main]

use arbitrary::Arbitrary;
use fission::{CharSource, ClosableCharSource, StringSource};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Read,
    Peek,
    PeekAhead(u8),
    Mark,
    Reset,
    Commit,
    ReadWhileBelow(u16),
    ReadUntil(u16),
    ReadLine,
    SkipWhitespace,
    Consume(String),
    Close,
}

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let len = input.text.encode_utf16().count();
    let mut source = StringSource::new(&input.text);
    let mut mark: Option<usize> = None;

    for op in input.ops {
        let before = source.position();
        match op {
            Op::Read => {
                let unit = source.read();
                assert_eq!(unit.is_some(), before < len);
            }
            Op::Peek => {
                let first = source.peek();
                assert_eq!(source.peek(), first);
                assert_eq!(source.position(), before);
            }
            Op::PeekAhead(count) => {
                let ahead = source.peek_ahead(usize::from(count));
                assert_eq!(ahead.len(), usize::from(count));
                assert_eq!(source.position(), before);
            }
            Op::Mark => {
                source.mark();
                mark = Some(before);
            }
            Op::Reset => {
                assert_eq!(source.reset().is_ok(), mark.is_some());
                if let Some(marked) = mark {
                    assert_eq!(source.position(), marked);
                }
            }
            Op::Commit => {
                assert_eq!(source.commit().is_ok(), mark.is_some());
                mark = None;
                assert_eq!(source.position(), before);
            }
            Op::ReadWhileBelow(limit) => {
                source.read_while(|u| u < limit);
                assert!(source.peek().is_none_or(|u| u >= limit));
            }
            Op::ReadUntil(delimiter) => {
                source.read_until(delimiter);
                assert!(source.peek().is_none_or(|u| u == delimiter));
            }
            Op::ReadLine => {
                source.read_line();
            }
            Op::SkipWhitespace => source.skip_whitespace(),
            Op::Consume(literal) => {
                let matched = source.starts_with(&literal);
                assert_eq!(source.consume(&literal), matched);
                let expected = if matched {
                    before + literal.encode_utf16().count()
                } else {
                    before
                };
                assert_eq!(source.position(), expected);
            }
            Op::Close => source.close(),
        }

        assert!(source.position() <= len);
        assert_eq!(source.remaining(), len - source.position());
        assert_eq!(source.has_next(), source.position() < len);
    }
});
