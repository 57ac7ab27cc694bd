use alloc::{collections::VecDeque, vec::Vec};

use tracing::{debug, trace};

use crate::{ByteSource, ReaderOptions, Rune, UnreadError, window::Window};

/// How far into the stream a [`Reader`] has read, after unreads.
///
/// End-of-stream reads count toward neither field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Runes returned and not unread.
    pub runes: usize,
    /// Source bytes those runes were decoded from.
    pub bytes: usize,
}

/// A rune reader with rewind, lookahead and history release.
///
/// Every rune decoded from the source is kept in a history buffer. A cursor
/// splits the history into runes already returned (which
/// [`unread_rune`](Self::unread_rune) walks back through) and runes decoded by
/// [`peek_runes`](Self::peek_runes) but not yet returned. Nothing is ever
/// decoded twice: replays after an unread or a peek come from the history.
///
/// The history only shrinks when [`forget`](Self::forget) is called, so
/// long-running lexers should call it after each committed token.
///
/// End of stream is reported as [`Rune::Eof`] on every read once the source
/// has ended. Each of those reads can be undone like any other; they are
/// tracked by a counter rather than stored, so probing past the end costs no
/// memory.
#[derive(Debug)]
pub struct Reader<S> {
    source: S,
    window: Window,
    history: VecDeque<Rune>,
    // history[..cursor] has been returned; history[cursor..] is lookahead.
    cursor: usize,
    // Undoable end-of-stream reads. Non-zero only with no lookahead left and
    // the source exhausted.
    rewind: usize,
    position: Position,
}

impl<S: ByteSource> Reader<S> {
    /// A reader over `source` with default options.
    pub fn new(source: S) -> Self {
        Self::with_options(source, ReaderOptions::default())
    }

    /// A reader over `source`.
    pub fn with_options(source: S, options: ReaderOptions) -> Self {
        let window = Window::new(options.chunk_size);
        trace!(
            chunk_size = window.capacity(),
            history_capacity = options.history_capacity,
            "new reader"
        );
        Self {
            source,
            window,
            history: VecDeque::with_capacity(options.history_capacity),
            cursor: 0,
            rewind: 0,
            position: Position::default(),
        }
    }

    /// Returns the next rune and advances past it.
    ///
    /// Runes given back by [`unread_rune`](Self::unread_rune) or decoded by a
    /// peek are returned before anything new is decoded. Once the source has
    /// ended this returns [`Rune::Eof`] on every call.
    ///
    /// # Errors
    ///
    /// Returns the source's error when the next rune cannot be decoded
    /// without a read and that read fails. The reader is left as it was, so
    /// the call may be retried; whether the retry succeeds depends on the
    /// source.
    pub fn read_rune(&mut self) -> Result<Rune, S::Error> {
        if let Some(&rune) = self.history.get(self.cursor) {
            self.advance(rune);
            return Ok(rune);
        }
        if let Some(rune) = self.window.next_rune(&mut self.source)? {
            self.history.push_back(rune);
            self.advance(rune);
            return Ok(rune);
        }
        self.rewind += 1;
        Ok(Rune::Eof)
    }

    /// Returns the next `n` runes without consuming them.
    ///
    /// If the stream ends first, the result is padded with [`Rune::Eof`] up to
    /// `n`. If the source fails first, the result is shorter than `n`; the
    /// error itself is reported by [`read_rune`](Self::read_rune) once the
    /// runes before it have been read.
    ///
    /// ```rust
    /// use runebuf::{Reader, Rune};
    ///
    /// let mut rd = Reader::new(&b"ok"[..]);
    /// let ahead = rd.peek_runes(3);
    /// assert_eq!(ahead, [Rune::from('o'), Rune::from('k'), Rune::Eof]);
    /// assert_eq!(rd.peek_runes(3), ahead);
    /// assert_eq!(rd.read_rune(), Ok(Rune::from('o')));
    /// ```
    pub fn peek_runes(&mut self, n: usize) -> Vec<Rune> {
        let available = self.fill_lookahead(n);
        let mut runes = Vec::with_capacity(n);
        runes.extend(self.history.range(self.cursor..self.cursor + available));
        if self.window.is_exhausted() {
            runes.resize(n, Rune::Eof);
        }
        runes
    }

    /// Returns the next rune without consuming it, or `None` if the source
    /// failed before it could be decoded.
    pub fn peek_rune(&mut self) -> Option<Rune> {
        if self.fill_lookahead(1) == 1 {
            Some(self.history[self.cursor])
        } else if self.window.is_exhausted() {
            Some(Rune::Eof)
        } else {
            None
        }
    }

    /// An iterator over the remaining runes as `(char, byte length)` pairs.
    ///
    /// Iteration stops after reading end of stream. That final
    /// [`Rune::Eof`] read counts like any other and can be unread.
    pub fn runes(&mut self) -> Runes<'_, S> {
        Runes {
            reader: self,
            done: false,
        }
    }

    /// Decodes into the lookahead until it holds `n` runes or the source
    /// stops, and returns `min(n, lookahead)`.
    fn fill_lookahead(&mut self, n: usize) -> usize {
        while self.lookahead() < n {
            match self.window.next_rune(&mut self.source) {
                Ok(Some(rune)) => self.history.push_back(rune),
                Ok(None) => break,
                Err(_) => {
                    debug!(
                        wanted = n,
                        decoded = self.lookahead(),
                        "lookahead stopped by source error"
                    );
                    break;
                }
            }
        }
        self.lookahead().min(n)
    }
}

impl<S> Reader<S> {
    /// Undoes the most recent [`read_rune`](Self::read_rune) that has not
    /// been undone yet.
    ///
    /// Repeated calls walk back through every read since construction or the
    /// last [`forget`](Self::forget), end-of-stream reads included.
    ///
    /// # Errors
    ///
    /// [`UnreadError::NoRuneToUnread`] if there is nothing left to undo. The
    /// reader is unchanged.
    pub fn unread_rune(&mut self) -> Result<(), UnreadError> {
        if self.rewind > 0 {
            self.rewind -= 1;
            return Ok(());
        }
        if self.cursor == 0 {
            return Err(UnreadError::NoRuneToUnread);
        }
        self.cursor -= 1;
        let rune = self.history[self.cursor];
        self.position.runes -= 1;
        self.position.bytes -= rune.size();
        Ok(())
    }

    /// Discards everything that could be unread.
    ///
    /// Runes already decoded by a peek but not yet read are kept, so the next
    /// [`read_rune`](Self::read_rune) is unaffected.
    pub fn forget(&mut self) {
        let dropped = self.cursor;
        self.history.drain(..self.cursor);
        self.cursor = 0;
        self.rewind = 0;
        trace!(dropped, kept = self.history.len(), "forgot history");
    }

    /// Position of the cursor in the stream.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// How many times [`unread_rune`](Self::unread_rune) would currently
    /// succeed.
    #[must_use]
    pub fn recallable(&self) -> usize {
        self.cursor + self.rewind
    }

    /// Runes decoded ahead of the cursor by peeking.
    #[must_use]
    pub fn lookahead(&self) -> usize {
        self.history.len() - self.cursor
    }

    /// Whether the source has ended and every byte it produced was decoded.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.window.is_exhausted()
    }

    /// The source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// The source, mutably. Bytes consumed from it directly are never seen
    /// by the reader.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwraps the source. Bytes read from it but not yet decoded are lost.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Panics if the internal bookkeeping is inconsistent.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn assert_invariants(&self) {
        assert!(self.cursor <= self.history.len());
        assert!(self.history.iter().all(|rune| !rune.is_eof()));
        if self.rewind > 0 {
            assert_eq!(self.cursor, self.history.len());
            assert!(self.window.is_exhausted());
        }
    }

    fn advance(&mut self, rune: Rune) {
        self.cursor += 1;
        self.position.runes += 1;
        self.position.bytes += rune.size();
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> Reader<crate::IoSource<R>> {
    /// A reader over any [`std::io::Read`].
    ///
    /// The reader does its own chunking, so wrapping `inner` in a
    /// `BufReader` first only adds a copy.
    pub fn from_read(inner: R) -> Self {
        Self::new(crate::IoSource::new(inner))
    }
}

/// Iterator returned by [`Reader::runes`].
#[derive(Debug)]
pub struct Runes<'a, S> {
    reader: &'a mut Reader<S>,
    done: bool,
}

impl<S: ByteSource> Iterator for Runes<'_, S> {
    type Item = Result<(char, usize), S::Error>;

    /// Yields source errors without ending iteration; calling `next` again
    /// retries the failed read.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_rune() {
            Ok(Rune::Char { ch, len }) => Some(Ok((ch, usize::from(len)))),
            Ok(Rune::Eof) => {
                self.done = true;
                None
            }
            Err(e) => Some(Err(e)),
        }
    }
}
