//! The narrow interface between the scanner engine and a buffered byte
//! source, plus the fully-resident in-memory source.

use core::convert::Infallible;

/// A growable, consumable byte source feeding a [`TokenScanner`].
///
/// The engine only ever sees the source through this interface: the
/// unconsumed window, a blocking refill, and a commit that consumes a prefix
/// of the window. The source owns the backing buffer and its growth policy;
/// the engine owns no buffer memory and holds only borrows into the
/// source's storage.
///
/// Exactly one scanner should drive a given source at a time; concurrent
/// tokenization requires independent scanner and source pairs.
///
/// [`TokenScanner`]: crate::TokenScanner
pub trait Source {
    /// Transport error surfaced by [`try_refill`](Source::try_refill).
    type Error;

    /// The currently buffered, unconsumed byte window.
    fn window(&self) -> &[u8];

    /// Reads more bytes from the underlying stream, blocking if necessary.
    ///
    /// Returns `Ok(true)` if at least one more byte became available.
    /// `Ok(false)` means permanent end-of-stream: once returned, no later
    /// call may ever return `Ok(true)` again. A refill may relocate the
    /// window, so callers must re-read it from offset zero afterwards.
    ///
    /// Transport errors propagate unmodified and must never be conflated
    /// with clean end-of-stream.
    fn try_refill(&mut self) -> Result<bool, Self::Error>;

    /// Commits the first `n` bytes of the window and returns the committed
    /// span, borrowed from the backing buffer. The span stays valid until
    /// the source is next mutated; previously returned windows are
    /// invalidated by the borrow checker.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the window length.
    fn consume(&mut self, n: usize) -> &[u8];

    /// Commits and returns everything left in the window.
    ///
    /// Only meaningful once [`try_refill`](Source::try_refill) has reported
    /// permanent end-of-stream.
    fn drain(&mut self) -> &[u8] {
        let n = self.window().len();
        self.consume(n)
    }
}

/// A [`Source`] over a fully-resident byte slice.
///
/// The whole input is available up front; refilling can never add more, so
/// [`try_refill`](Source::try_refill) always reports end-of-stream.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Creates a source over `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl Source for SliceSource<'_> {
    type Error = Infallible;

    #[inline]
    fn window(&self) -> &[u8] {
        &self.data[self.pos..]
    }

    #[inline]
    fn try_refill(&mut self) -> Result<bool, Infallible> {
        Ok(false)
    }

    fn consume(&mut self, n: usize) -> &[u8] {
        let committed = &self.data[self.pos..self.pos + n];
        self.pos += n;
        committed
    }
}

#[cfg(test)]
mod tests {
    use super::{SliceSource, Source};

    #[test]
    fn slice_source_commits_prefixes() {
        let mut source = SliceSource::new(b"hello world");
        assert_eq!(source.window(), b"hello world");
        assert_eq!(source.try_refill(), Ok(false));

        assert_eq!(source.consume(6), b"hello ");
        assert_eq!(source.window(), b"world");

        assert_eq!(source.drain(), b"world");
        assert_eq!(source.window(), b"");
        assert_eq!(source.drain(), b"");
    }

    #[test]
    #[should_panic(expected = "range end index")]
    fn slice_source_rejects_overlong_commit() {
        let mut source = SliceSource::new(b"abc");
        source.consume(4);
    }
}
