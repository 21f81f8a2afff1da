use alloc::vec::Vec;
use core::ops::ControlFlow;

use quickcheck::QuickCheck;

use crate::{SliceSource, TokenScanner, matchers, tests::ChunkedSource};

const DELIMITER: u8 = b',';

fn split_resident(data: &[u8]) -> Vec<Vec<u8>> {
    let mut scanner = TokenScanner::new(SliceSource::new(data), matchers::byte(DELIMITER));
    let mut out = Vec::new();
    scanner
        .for_each_token(|token| {
            out.push(token.to_vec());
            ControlFlow::<()>::Continue(())
        })
        .unwrap();
    out
}

/// Reference model: slice `split`, minus the trailing empty piece that
/// appears when the input is empty or ends in a delimiter. The scanner
/// emits a trailing token only when nonempty.
fn split_model(data: &[u8]) -> Vec<Vec<u8>> {
    let mut pieces: Vec<Vec<u8>> = data
        .split(|&b| b == DELIMITER)
        .map(<[u8]>::to_vec)
        .collect();
    if pieces.last().is_some_and(Vec::is_empty) {
        pieces.pop();
    }
    pieces
}

fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Property: for any input, the emitted token sequence matches the
/// exclusive-delimiter split model (empty tokens emitted, trailing empty
/// token suppressed).
#[test]
fn split_matches_model_quickcheck() {
    fn prop(data: Vec<u8>) -> bool {
        split_resident(&data) == split_model(&data)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: concatenating every token with its captured delimiter
/// reconstructs the original input exactly.
#[test]
fn delimiter_roundtrip_quickcheck() {
    fn prop(data: Vec<u8>) -> bool {
        let mut scanner = TokenScanner::new(SliceSource::new(&data), matchers::byte(DELIMITER));
        let mut rebuilt = Vec::new();
        scanner
            .for_each_with_delimiter(|_, token, delimiter| {
                rebuilt.extend_from_slice(token);
                rebuilt.extend_from_slice(delimiter);
                ControlFlow::<()>::Continue(())
            })
            .unwrap();
        rebuilt == data
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: feeding the same input through arbitrarily sized refill chunks
/// yields the identical token sequence as having it fully resident.
#[test]
fn partition_equivalence_quickcheck() {
    fn prop(data: Vec<u8>, sizes: Vec<usize>) -> bool {
        let sizes: Vec<usize> = sizes.into_iter().map(|s| 1 + s % 37).collect();
        let source = ChunkedSource::new(data.clone(), sizes);
        let mut scanner = TokenScanner::new(source, matchers::byte(DELIMITER));

        let mut chunked = Vec::new();
        scanner
            .for_each_token(|token| {
                chunked.push(token.to_vec());
                ControlFlow::<()>::Continue(())
            })
            .unwrap();
        chunked == split_resident(&data)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>, Vec<usize>) -> bool);
}
