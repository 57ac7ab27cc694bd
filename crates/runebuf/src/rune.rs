use core::fmt;

/// One element handed out by a [`Reader`](crate::Reader).
///
/// Either a decoded scalar together with the number of source bytes it was
/// decoded from, or the end-of-stream sentinel. End of stream is a value, not
/// an error: once reached, it is returned again on every subsequent read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rune {
    /// A decoded scalar value.
    Char {
        /// The scalar. U+FFFD for malformed input.
        ch: char,
        /// Number of source bytes consumed (1-4).
        len: u8,
    },
    /// Clean end of the byte stream. Occupies no bytes.
    Eof,
}

impl Rune {
    /// The rune substituted for a single byte that cannot start a valid UTF-8
    /// sequence.
    pub const INVALID: Rune = Rune::Char {
        ch: char::REPLACEMENT_CHARACTER,
        len: 1,
    };

    /// The decoded scalar, or `None` at end of stream.
    #[must_use]
    #[inline]
    pub fn char(self) -> Option<char> {
        match self {
            Rune::Char { ch, .. } => Some(ch),
            Rune::Eof => None,
        }
    }

    /// Number of source bytes this rune was decoded from; zero for
    /// [`Rune::Eof`].
    #[must_use]
    #[inline]
    pub fn size(self) -> usize {
        match self {
            Rune::Char { len, .. } => usize::from(len),
            Rune::Eof => 0,
        }
    }

    /// Whether this is the end-of-stream sentinel.
    #[must_use]
    #[inline]
    pub fn is_eof(self) -> bool {
        matches!(self, Rune::Eof)
    }

    /// Whether this rune stands in for a malformed byte, as opposed to an
    /// encoded U+FFFD in the input.
    #[must_use]
    #[inline]
    pub fn is_invalid(self) -> bool {
        self == Rune::INVALID
    }
}

impl From<char> for Rune {
    /// A rune as it would be decoded from the UTF-8 encoding of `ch`.
    fn from(ch: char) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let len = ch.len_utf8() as u8;
        Rune::Char { ch, len }
    }
}

impl PartialEq<char> for Rune {
    fn eq(&self, other: &char) -> bool {
        self.char() == Some(*other)
    }
}

impl fmt::Display for Rune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rune::Char { ch, .. } => fmt::Display::fmt(ch, f),
            Rune::Eof => f.write_str("<eof>"),
        }
    }
}
