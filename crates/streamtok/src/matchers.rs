//! Stock boundary matchers for delimiter-based splitting.
//!
//! Each constructor returns a closure conforming to the [`Matcher`] blanket
//! implementation. All of these are exclusive: the delimiter terminates the
//! token and is captured separately by delimiter-aware iteration, never
//! included in the token itself.
//!
//! [`Matcher`]: crate::Matcher

use crate::{MatchResult, contains_byte};

/// Matches at the first occurrence of a single delimiter byte.
#[must_use]
pub fn byte(delimiter: u8) -> impl FnMut(&[u8]) -> MatchResult {
    move |window: &[u8]| match memchr::memchr(delimiter, window) {
        Some(i) => MatchResult::found_at(i),
        None => MatchResult::NotFound,
    }
}

/// Matches at the first occurrence of any byte in `set`.
///
/// Membership is a linear scan; sets are expected to be small, e.g. a few
/// whitespace characters.
#[must_use]
pub fn any_of(set: &[u8]) -> impl FnMut(&[u8]) -> MatchResult + '_ {
    move |window: &[u8]| match window.iter().position(|&b| contains_byte(set, b)) {
        Some(i) => MatchResult::found_at(i),
        None => MatchResult::NotFound,
    }
}

/// Splits on newlines.
#[must_use]
pub fn line() -> impl FnMut(&[u8]) -> MatchResult {
    byte(b'\n')
}
