//! A streaming, zero-copy token scanner.
//!
//! [`TokenScanner`] extracts delimited substrings ("tokens") from a growable
//! byte source incrementally, as bytes arrive, without requiring the whole
//! input to be resident in memory. Tokens are borrowed views into the live
//! buffer and are never copied; a scan that runs out of buffered bytes
//! mid-token asks the source for more and re-scans without losing progress;
//! and the recognition of token boundaries is a pluggable strategy supplied
//! by the caller as a [`Matcher`].
//!
//! The scanner is single-threaded and fully synchronous. The only operation
//! that may block is the source's refill; the scanner has no timeout or
//! cancellation of its own.
//!
//! ```
//! use core::ops::ControlFlow;
//!
//! use streamtok::{SliceSource, TokenScanner, matchers};
//!
//! let source = SliceSource::new(b"a,b,,c");
//! let mut scanner = TokenScanner::new(source, matchers::byte(b','));
//!
//! let mut tokens = Vec::new();
//! scanner
//!     .for_each_token(|token| {
//!         tokens.push(token.to_vec());
//!         ControlFlow::<()>::Continue(())
//!     })
//!     .unwrap();
//! assert_eq!(tokens, [&b"a"[..], b"b", b"", b"c"]);
//! ```
//!
//! Sources are anything implementing [`Source`]: [`SliceSource`] for
//! fully-resident input, or [`ReaderSource`] (with the default `std`
//! feature) for a growable buffer over a blocking [`std::io::Read`] stream.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(any(test, feature = "std"))]
extern crate alloc;

mod error;
mod match_rules;
pub mod matchers;
#[cfg(feature = "std")]
mod reader;
mod scanner;
mod source;

#[cfg(test)]
mod tests;

pub use error::ScanError;
pub use match_rules::{MatchResult, Matcher, contains_byte};
#[cfg(feature = "std")]
pub use reader::ReaderSource;
pub use scanner::{ScanStep, TokenScanner};
pub use source::{SliceSource, Source};
