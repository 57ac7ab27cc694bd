//! Sliding byte window between a [`ByteSource`] and the decoder.
//!
//! Bytes are read one chunk at a time. When the decoder cannot make progress
//! on what is left of a chunk (a sequence cut off by the chunk boundary), the
//! leftover bytes move to the front of the window and the next chunk is read
//! behind them.

use alloc::{boxed::Box, vec};

use bstr::BStr;
use tracing::trace;

use crate::{
    ByteSource, Rune,
    decode::{UTF8_MAX, decode_rune},
};

#[derive(Debug)]
pub(crate) struct Window {
    buf: Box<[u8]>,
    // Undecoded bytes are `buf[start..end]`.
    start: usize,
    end: usize,
    // The source reported a clean end; it is never filled from again.
    ended: bool,
}

impl Window {
    /// A window reading `chunk_size` bytes at a time, but never fewer than
    /// one full sequence.
    pub(crate) fn new(chunk_size: usize) -> Self {
        Self {
            buf: vec![0; chunk_size.max(UTF8_MAX)].into_boxed_slice(),
            start: 0,
            end: 0,
            ended: false,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// All input has been decoded and the source has ended.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.ended && self.start == self.end
    }

    /// Decodes the next rune, reading from `src` as needed.
    ///
    /// `Ok(None)` means clean end of stream and is repeatable without touching
    /// `src`. On `Err` no undecoded byte is lost, so calling again retries the
    /// same stream position.
    pub(crate) fn next_rune<S: ByteSource>(
        &mut self,
        src: &mut S,
    ) -> Result<Option<Rune>, S::Error> {
        loop {
            if let Some(rune) = decode_rune(&self.buf[self.start..self.end], self.ended) {
                self.start += rune.size();
                return Ok(Some(rune));
            }
            if self.ended {
                return Ok(None);
            }
            self.fill(src)?;
        }
    }

    fn fill<S: ByteSource>(&mut self, src: &mut S) -> Result<(), S::Error> {
        // At most a truncated sequence is left, so this always frees space.
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        debug_assert!(self.end < UTF8_MAX);

        let filled = src.fill(&mut self.buf[self.end..])?;
        let n = filled.len().min(self.buf.len() - self.end);
        trace!(
            carried = ?BStr::new(&self.buf[..self.end]),
            read = n,
            end = filled.is_end(),
            "filled window"
        );
        self.end += n;
        if filled.is_end() {
            self.ended = true;
            trace!(
                leftover = ?BStr::new(&self.buf[self.start..self.end]),
                "source ended"
            );
        }
        Ok(())
    }
}
