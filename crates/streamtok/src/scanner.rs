//! The token scanner engine: drives a matcher over a buffered source and
//! slices committed regions into tokens.
//!
//! On every fetch the engine hands the source's unconsumed window to the
//! matcher. `NotFound` triggers a refill and a re-scan from offset zero of
//! the (possibly relocated, larger) window; `Found` commits the region and
//! splits it into token and delimiter. Re-scanning already-seen bytes after
//! each refill keeps matchers stateless; pathological unbounded tokens
//! degrade to O(n²) rescans, a known and accepted trade-off.
//!
//! End-of-stream is terminal: once the source reports that no further growth
//! is possible, whatever bytes remain are drained as one final,
//! delimiter-less token and the scanner reports exhaustion permanently.
//! Rebinding to a fresh source starts a new sequence.

use core::ops::ControlFlow;

use crate::{MatchResult, Matcher, ScanError, Source};

/// One produced token together with the delimiter that terminated it.
///
/// Both slices borrow from the bound source's backing buffer and are
/// invalidated by the next fetch; the borrow checker enforces that callers
/// do not retain them across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStep<'buf> {
    /// The token content, delimiter excluded.
    pub token: &'buf [u8],
    /// The separator that terminated the token. Empty for a trailing token
    /// produced at end-of-stream without a final separator.
    pub delimiter: &'buf [u8],
    /// `false` once the source has reported permanent end-of-stream; the
    /// token carrying it is the last one this binding will produce.
    pub has_more: bool,
}

/// A streaming token scanner over a [`Source`], with a pluggable [`Matcher`]
/// deciding where token boundaries lie.
///
/// The committed region's final byte is taken to be the separator: a matcher
/// reporting [`MatchResult::found_at(i)`] yields the token `window[..i]` and
/// the delimiter `window[i..=i]`. Empty tokens between adjacent delimiters
/// are emitted, not suppressed, so splitting `b"a,b,,c"` on commas produces
/// four tokens. A trailing token at end-of-stream is emitted only when
/// nonempty and carries an empty delimiter.
///
/// A scanner holds at most one bound source; [`bind`](TokenScanner::bind)
/// replaces it. Instances are independent, hold no global state, and must
/// not be shared across threads while scanning.
///
/// ```
/// use streamtok::{ScanError, SliceSource, TokenScanner, matchers};
///
/// let mut scanner = TokenScanner::new(SliceSource::new(b"one\ntwo"), matchers::line());
/// assert_eq!(scanner.next_token()?, Some(&b"one"[..]));
/// assert_eq!(scanner.next_token()?, Some(&b"two"[..]));
/// assert_eq!(scanner.next_token()?, None);
/// # Ok::<(), ScanError<core::convert::Infallible>>(())
/// ```
///
/// [`MatchResult::found_at(i)`]: crate::MatchResult::found_at
#[derive(Debug)]
pub struct TokenScanner<S, M> {
    source: Option<S>,
    matcher: M,
    exhausted: bool,
}

impl<S: Source, M: Matcher> TokenScanner<S, M> {
    /// Creates a scanner bound to `source`.
    pub fn new(source: S, matcher: M) -> Self {
        Self {
            source: Some(source),
            matcher,
            exhausted: false,
        }
    }

    /// Creates a scanner with no bound source yet. Fetching before
    /// [`bind`](TokenScanner::bind) fails with [`ScanError::Unbound`].
    pub fn unbound(matcher: M) -> Self {
        Self {
            source: None,
            matcher,
            exhausted: false,
        }
    }

    /// Binds `source`, replacing and returning any previously bound one.
    ///
    /// Rebinding starts a fresh token sequence: a scanner exhausted on its
    /// old source scans again from the new one. This is the only way to
    /// restart iteration; a bound source is never rewound.
    pub fn bind(&mut self, source: S) -> Option<S> {
        self.exhausted = false;
        self.source.replace(source)
    }

    /// Whether the current binding has reported permanent end-of-stream.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Produces the next token together with its delimiter.
    ///
    /// Returns `Ok(None)` at true end-of-input with no trailing data, and
    /// keeps returning it on every later call until rebound. The returned
    /// slices are valid only until the next fetch.
    ///
    /// # Errors
    ///
    /// [`ScanError::Unbound`] if no source is bound; [`ScanError::Source`]
    /// if the underlying stream fails during a refill, in which case the
    /// in-flight token is not produced and the source's committed prefix
    /// remains valid.
    ///
    /// # Panics
    ///
    /// Panics if the matcher reports a boundary of zero or beyond the end
    /// of the window; both violate the [`Matcher`] contract.
    pub fn next_step(&mut self) -> Result<Option<ScanStep<'_>>, ScanError<S::Error>> {
        if self.exhausted {
            return Ok(None);
        }
        let source = self.source.as_mut().ok_or(ScanError::Unbound)?;
        match scan_boundary(source, &mut self.matcher)? {
            Some(stop) => {
                let committed = source.consume(stop);
                let (token, delimiter) = committed.split_at(stop - 1);
                Ok(Some(ScanStep {
                    token,
                    delimiter,
                    has_more: true,
                }))
            }
            None => {
                self.exhausted = true;
                let token = source.drain();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(ScanStep {
                        token,
                        delimiter: &[],
                        has_more: false,
                    }))
                }
            }
        }
    }

    /// Produces the next token, discarding the delimiter.
    ///
    /// # Errors
    ///
    /// See [`next_step`](TokenScanner::next_step).
    pub fn next_token(&mut self) -> Result<Option<&[u8]>, ScanError<S::Error>> {
        Ok(self.next_step()?.map(|step| step.token))
    }

    /// Yields every remaining token to `f` until it breaks or input is
    /// exhausted, returning the break value if any.
    ///
    /// # Errors
    ///
    /// See [`next_step`](TokenScanner::next_step).
    pub fn for_each_token<B, F>(&mut self, mut f: F) -> Result<Option<B>, ScanError<S::Error>>
    where
        F: FnMut(&[u8]) -> ControlFlow<B>,
    {
        self.drive(|_, step: ScanStep<'_>| f(step.token))
    }

    /// Like [`for_each_token`](TokenScanner::for_each_token), additionally
    /// passing the zero-based count of tokens produced so far.
    ///
    /// # Errors
    ///
    /// See [`next_step`](TokenScanner::next_step).
    pub fn for_each_indexed<B, F>(&mut self, mut f: F) -> Result<Option<B>, ScanError<S::Error>>
    where
        F: FnMut(usize, &[u8]) -> ControlFlow<B>,
    {
        self.drive(|index, step: ScanStep<'_>| f(index, step.token))
    }

    /// Like [`for_each_indexed`](TokenScanner::for_each_indexed),
    /// additionally passing the delimiter that terminated each token. The
    /// delimiter is empty for a trailing token with no final separator.
    ///
    /// # Errors
    ///
    /// See [`next_step`](TokenScanner::next_step).
    pub fn for_each_with_delimiter<B, F>(
        &mut self,
        mut f: F,
    ) -> Result<Option<B>, ScanError<S::Error>>
    where
        F: FnMut(usize, &[u8], &[u8]) -> ControlFlow<B>,
    {
        self.drive(|index, step: ScanStep<'_>| f(index, step.token, step.delimiter))
    }

    fn drive<B, F>(&mut self, mut f: F) -> Result<Option<B>, ScanError<S::Error>>
    where
        F: FnMut(usize, ScanStep<'_>) -> ControlFlow<B>,
    {
        let mut index = 0;
        while let Some(step) = self.next_step()? {
            if let ControlFlow::Break(out) = f(index, step) {
                return Ok(Some(out));
            }
            index += 1;
        }
        Ok(None)
    }
}

/// Runs the matcher-invocation / refill loop until a boundary is found
/// (`Some(stop)`) or the source reports permanent end-of-stream (`None`).
/// Only committed offsets escape this loop, never window borrows.
fn scan_boundary<S: Source, M: Matcher>(
    source: &mut S,
    matcher: &mut M,
) -> Result<Option<usize>, ScanError<S::Error>> {
    loop {
        let (result, window_len) = {
            let window = source.window();
            (matcher.find(window), window.len())
        };
        match result {
            MatchResult::Found(stop) => {
                assert!(
                    stop >= 1 && stop <= window_len,
                    "matcher reported boundary {stop} outside window of {window_len} bytes",
                );
                return Ok(Some(stop));
            }
            MatchResult::NotFound => {
                if !source.try_refill()? {
                    return Ok(None);
                }
            }
        }
    }
}
