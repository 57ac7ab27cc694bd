use core::convert::Infallible;

use crate::{ByteSource, Filled};

/// A source that hands out `payload` in pieces of at most `chunk` bytes.
///
/// Pieces are cut at byte positions without regard for UTF-8 boundaries, so a
/// multi-byte sequence can straddle two fills. Useful for exercising lexers
/// against every possible split of their input.
#[derive(Debug, Clone)]
pub struct ChunkedSource<'a> {
    payload: &'a [u8],
    chunk: usize,
}

impl<'a> ChunkedSource<'a> {
    /// Serves `payload` at most `chunk` bytes per fill.
    ///
    /// # Panics
    ///
    /// Panics if `chunk` is zero.
    #[must_use]
    pub fn new(payload: &'a [u8], chunk: usize) -> Self {
        assert!(chunk > 0);
        Self { payload, chunk }
    }

    /// Splits `payload` into approximately `parts` equal-sized pieces.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is zero.
    #[must_use]
    pub fn from_parts(payload: &'a [u8], parts: usize) -> Self {
        assert!(parts > 0);
        Self::new(payload, payload.len().div_ceil(parts).max(1))
    }

    /// Bytes not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        self.payload
    }
}

impl ByteSource for ChunkedSource<'_> {
    type Error = Infallible;

    fn fill(&mut self, buf: &mut [u8]) -> Result<Filled, Self::Error> {
        if self.payload.is_empty() {
            return Ok(Filled::End(0));
        }
        let n = buf.len().min(self.chunk).min(self.payload.len());
        let (head, tail) = self.payload.split_at(n);
        buf[..n].copy_from_slice(head);
        self.payload = tail;
        Ok(Filled::More(n))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn drain(mut src: ChunkedSource<'_>) -> Vec<Vec<u8>> {
        let mut pieces = Vec::new();
        let mut buf = [0u8; 16];
        loop {
            match src.fill(&mut buf) {
                Ok(Filled::More(n)) => pieces.push(buf[..n].to_vec()),
                Ok(Filled::End(_)) => return pieces,
                Err(e) => match e {},
            }
        }
    }

    #[test]
    fn splits_inside_sequences() {
        let pieces = drain(ChunkedSource::new("☺☹".as_bytes(), 2));
        assert_eq!(
            pieces,
            [
                b"\xE2\x98".to_vec(),
                b"\xBA\xE2".to_vec(),
                b"\x98\xB9".to_vec()
            ]
        );
    }

    #[test]
    fn from_parts_covers_payload() {
        let payload = b"[\"foo\",\"bar\"]";
        let pieces = drain(ChunkedSource::from_parts(payload, 5));
        assert_eq!(pieces.len(), 5);
        assert_eq!(pieces.concat(), payload);
    }

    #[test]
    fn empty_payload_ends_immediately() {
        assert!(drain(ChunkedSource::from_parts(b"", 3)).is_empty());
    }
}
