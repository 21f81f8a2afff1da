//! The matcher contract and boundary-reporting primitives.
//!
//! A matcher is a pure function of the currently buffered, unconsumed byte
//! window. It either locates a token boundary or reports that the window
//! holds no complete token yet, in which case the engine refills the buffer
//! and runs the matcher again from offset zero of the (larger) window.
//! Matchers are therefore stateless across calls except via the window
//! itself, and must be deterministic for a given window.

/// Outcome of running a [`Matcher`] over the unconsumed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// A boundary was found. The offset is the exclusive end of the region
    /// to commit: the token plus its terminating delimiter.
    Found(usize),
    /// The window holds no complete token yet; the engine should refill and
    /// re-scan. Distinct from permanent end-of-stream, which only the source
    /// can report.
    NotFound,
}

impl MatchResult {
    /// Reports a boundary from the zero-based index of the last matched
    /// element, converting it into the exclusive-end offset `last + 1`.
    ///
    /// Every concrete matcher returns boundaries through this conversion
    /// rather than a raw index, so off-by-one handling stays in one place.
    #[must_use]
    #[inline]
    pub const fn found_at(last: usize) -> Self {
        Self::Found(last + 1)
    }

    /// Whether this result carries a boundary.
    #[must_use]
    #[inline]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// A token-boundary recognition strategy.
///
/// The engine owns when and how re-scanning happens; the matcher only
/// decides where a boundary lies within the bytes it is handed. After a
/// refill the matcher is invoked again over the whole window, so it must not
/// assume it continues where a previous call stopped.
///
/// Any `FnMut(&[u8]) -> MatchResult` closure is a matcher; see [`matchers`]
/// for the stock delimiter strategies.
///
/// [`matchers`]: crate::matchers
pub trait Matcher {
    /// Scans `window` for the next token boundary.
    fn find(&mut self, window: &[u8]) -> MatchResult;
}

impl<F: FnMut(&[u8]) -> MatchResult> Matcher for F {
    #[inline]
    fn find(&mut self, window: &[u8]) -> MatchResult {
        self(window)
    }
}

/// Linear membership test over a small delimiter set.
///
/// Delimiter sets are expected to be small (a handful of whitespace or
/// punctuation bytes), so this is not a performance-critical path.
#[must_use]
#[inline]
pub fn contains_byte(set: &[u8], byte: u8) -> bool {
    set.iter().any(|&b| b == byte)
}
