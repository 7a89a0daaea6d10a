use super::char_source::CharSource;

/// A [`CharSource`] with an explicit release step.
///
/// After [`close`](ClosableCharSource::close) every read behaves as if the end
/// of input was reached: `read` and `peek` return `None`, `has_next` returns
/// `false` and lookahead yields only `None` entries.
///
/// # Implementation Guidelines
///
/// - `close()` must be idempotent; calling it again is a no-op.
/// - `close()` never fails.
/// - Sources holding no resources may implement `close()` as a no-op.
///
/// # Example
///
/// ```ignore
/// let mut source = FileSource::open("config.toml", Encoding::Utf8)?;
/// let header = source.read_line();
/// source.close();
/// source.close(); // fine
/// assert!(!source.has_next());
/// ```
pub trait ClosableCharSource: CharSource {
    /// Releases the backing buffer.
    fn close(&mut self);

    /// Returns `true` once [`close`](ClosableCharSource::close) has been called.
    fn is_closed(&self) -> bool;
}
