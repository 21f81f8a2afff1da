mod properties;

use alloc::vec::Vec;
use core::convert::Infallible;

use crate::Source;

/// An in-memory source that reveals its input a chunk at a time, one chunk
/// per refill. Models arbitrarily fragmented delivery of a known input.
pub(crate) struct ChunkedSource {
    data: Vec<u8>,
    available: usize,
    pos: usize,
    sizes: Vec<usize>,
    next_size: usize,
}

impl ChunkedSource {
    /// `sizes` gives the number of bytes revealed by each successive refill;
    /// once exhausted, refills reveal one byte at a time.
    pub(crate) fn new(data: Vec<u8>, sizes: Vec<usize>) -> Self {
        Self {
            data,
            available: 0,
            pos: 0,
            sizes,
            next_size: 0,
        }
    }
}

impl Source for ChunkedSource {
    type Error = Infallible;

    fn window(&self) -> &[u8] {
        &self.data[self.pos..self.available]
    }

    fn try_refill(&mut self) -> Result<bool, Infallible> {
        if self.available == self.data.len() {
            return Ok(false);
        }
        let step = self.sizes.get(self.next_size).copied().unwrap_or(1).max(1);
        self.next_size += 1;
        self.available = (self.available + step).min(self.data.len());
        Ok(true)
    }

    fn consume(&mut self, n: usize) -> &[u8] {
        let committed = &self.data[self.pos..self.pos + n];
        self.pos += n;
        committed
    }
}
