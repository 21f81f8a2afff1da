use thiserror::Error;

/// Errors surfaced by [`TokenScanner`] fetch and iteration calls.
///
/// End-of-stream is not an error; it is the normal terminal condition,
/// reported as an `Ok(None)` result.
///
/// [`TokenScanner`]: crate::TokenScanner
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError<E> {
    /// A fetch was attempted on a scanner with no bound source.
    #[error("scanner is not bound to a source")]
    Unbound,
    /// The underlying stream failed during a refill.
    ///
    /// The transport error is propagated unmodified; the in-flight token is
    /// not produced, but the already-committed prefix of the source remains
    /// valid.
    #[error("refill failed: {0}")]
    Source(#[from] E),
}
