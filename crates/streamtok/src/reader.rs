//! Growable buffered source over a blocking [`std::io::Read`] stream.

use alloc::vec::Vec;
use std::io::{self, ErrorKind, Read};

use crate::Source;

/// Default refill read size in bytes.
const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// A [`Source`] that grows its buffer from a blocking reader.
///
/// Each refill appends up to one chunk of freshly read bytes to the buffer.
/// The committed prefix is compacted away first, so the buffer only ever
/// holds the unconsumed window plus the new bytes; compaction relocates the
/// window, which the scanner tolerates by re-scanning from offset zero. A
/// read returning zero bytes is permanent end-of-stream.
///
/// The source never closes the reader; releasing the stream is the caller's
/// responsibility, after scanning is done.
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: R,
    buf: Vec<u8>,
    pos: usize,
    chunk_size: usize,
    eof: bool,
}

impl<R: Read> ReaderSource<R> {
    /// Creates a source with the default 8 KiB refill size.
    pub fn new(inner: R) -> Self {
        Self::with_chunk_size(inner, DEFAULT_CHUNK_SIZE)
    }

    /// Creates a source reading up to `chunk_size` bytes per refill.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_chunk_size(inner: R, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be nonzero");
        Self {
            inner,
            buf: Vec::with_capacity(chunk_size),
            pos: 0,
            chunk_size,
            eof: false,
        }
    }

    /// Consumes the source, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn compact(&mut self) {
        if self.pos > 0 {
            self.buf.drain(..self.pos);
            self.pos = 0;
        }
    }
}

impl<R: Read> Source for ReaderSource<R> {
    type Error = io::Error;

    #[inline]
    fn window(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    fn try_refill(&mut self) -> Result<bool, io::Error> {
        if self.eof {
            return Ok(false);
        }
        // Any window borrows have ended by the time we are called mutably,
        // so the committed prefix can be reclaimed before growing.
        self.compact();
        let old_len = self.buf.len();
        self.buf.resize(old_len + self.chunk_size, 0);
        let read = loop {
            match self.inner.read(&mut self.buf[old_len..]) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    self.buf.truncate(old_len);
                    return Err(e);
                }
            }
        };
        self.buf.truncate(old_len + read);
        if read == 0 {
            self.eof = true;
            Ok(false)
        } else {
            Ok(true)
        }
    }

    fn consume(&mut self, n: usize) -> &[u8] {
        let committed = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        committed
    }
}
