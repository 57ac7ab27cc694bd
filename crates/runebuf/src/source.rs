use core::convert::Infallible;

/// Outcome of a successful [`ByteSource::fill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filled {
    /// This many bytes were written; more may follow.
    More(usize),
    /// This many bytes were written and the stream then ended cleanly.
    End(usize),
}

impl Filled {
    /// Number of bytes written into the caller's buffer.
    #[must_use]
    pub fn len(self) -> usize {
        match self {
            Filled::More(n) | Filled::End(n) => n,
        }
    }

    /// Whether no bytes were written.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether the stream ended.
    #[must_use]
    pub fn is_end(self) -> bool {
        matches!(self, Filled::End(_))
    }
}

/// A sequential producer of bytes.
///
/// The reader calls [`fill`](ByteSource::fill) only when it has run out of
/// decodable bytes, and never again once a fill returned [`Filled::End`].
/// After an `Err` it may call `fill` again later; whether that succeeds is up
/// to the source.
pub trait ByteSource {
    /// Failure reported by the underlying stream.
    type Error;

    /// Writes up to `buf.len()` bytes into `buf`.
    ///
    /// `buf` is never empty. Returning `Filled::More(0)` is allowed but makes
    /// the reader ask again straight away, so blocking sources should wait for
    /// data instead.
    ///
    /// # Errors
    ///
    /// Returns the stream's own error; the reader hands it to the caller
    /// unchanged.
    fn fill(&mut self, buf: &mut [u8]) -> Result<Filled, Self::Error>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn fill(&mut self, buf: &mut [u8]) -> Result<Filled, Self::Error> {
        (**self).fill(buf)
    }
}

/// In-memory input. Ends as soon as the slice is used up.
impl ByteSource for &[u8] {
    type Error = Infallible;

    fn fill(&mut self, buf: &mut [u8]) -> Result<Filled, Self::Error> {
        let n = buf.len().min(self.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        if self.is_empty() {
            Ok(Filled::End(n))
        } else {
            Ok(Filled::More(n))
        }
    }
}

/// Adapts a [`std::io::Read`] into a [`ByteSource`].
///
/// A read of zero bytes is end of stream and
/// [`Interrupted`](std::io::ErrorKind::Interrupted) reads are retried.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> IoSource<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// The wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// The wrapped reader, mutably. Reading from it directly skips bytes the
    /// rune reader has not seen.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
    type Error = std::io::Error;

    fn fill(&mut self, buf: &mut [u8]) -> Result<Filled, Self::Error> {
        loop {
            match self.inner.read(buf) {
                Ok(0) => return Ok(Filled::End(0)),
                Ok(n) => return Ok(Filled::More(n)),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}
