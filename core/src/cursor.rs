//! Position and mark bookkeeping shared by the buffer-backed sources.

use crate::Error;

/// A read position over an owned, immutable buffer of UTF-16 code units.
///
/// Holds the invariant `pos <= units.len()` until the buffer is released;
/// `mark`, when set, is a position that was observed earlier. A released
/// cursor keeps `pos` and reads as end of input.
#[derive(Debug, Clone, Default)]
pub(crate) struct Cursor {
    units: Box<[u16]>,
    pos: usize,
    mark: Option<usize>,
}

impl Cursor {
    #[inline]
    pub(crate) fn new(units: impl Into<Box<[u16]>>) -> Self {
        Self {
            units: units.into(),
            pos: 0,
            mark: None,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.units.len()
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Option<u16> {
        self.units.get(self.pos).copied()
    }

    #[inline(always)]
    pub(crate) fn read(&mut self) -> Option<u16> {
        let unit = self.peek()?;
        self.pos += 1;
        Some(unit)
    }

    pub(crate) fn peek_ahead(&self, count: usize) -> Vec<Option<u16>> {
        let available = self.units.get(self.pos..).unwrap_or_default();
        let mut ahead = Vec::with_capacity(count);
        ahead.extend(available.iter().take(count).copied().map(Some));
        ahead.resize(count, None);
        ahead
    }

    #[inline]
    pub(crate) fn has_next(&self) -> bool {
        self.pos < self.units.len()
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.units.len().saturating_sub(self.pos)
    }

    #[inline]
    pub(crate) fn mark(&mut self) {
        self.mark = Some(self.pos);
    }

    #[inline]
    pub(crate) fn reset(&mut self) -> Result<(), Error> {
        self.pos = self.mark.ok_or(Error::InvalidState)?;
        Ok(())
    }

    #[inline]
    pub(crate) fn commit(&mut self) -> Result<(), Error> {
        self.mark.take().ok_or(Error::InvalidState)?;
        Ok(())
    }

    /// Drops the buffer and the mark. The position is kept.
    pub(crate) fn release(&mut self) {
        self.units = Box::default();
        self.mark = None;
    }
}
