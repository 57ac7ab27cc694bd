//! Stateless UTF-8 decoding of the first rune in a byte window.
//!
//! Kept free of any reader state so malformed, truncated and
//! boundary-straddling input can be tested on plain slices.

use crate::Rune;

/// Length in bytes of the longest valid UTF-8 sequence.
pub const UTF8_MAX: usize = 4;

/// Number of bytes in the sequence introduced by `lead`, or 0 if `lead`
/// cannot start a valid sequence (continuation bytes, overlong `C0`/`C1`
/// leads and everything above `F4`).
#[must_use]
#[inline]
pub fn sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Decodes the rune at the start of `bytes`.
///
/// Returns `None` when no decision can be made yet: `bytes` is empty, or it
/// holds a valid but truncated prefix and `at_eof` is false. Once `at_eof` is
/// set a truncated prefix is malformed input.
///
/// Malformed input always yields [`Rune::INVALID`], consuming exactly one
/// byte, so decoding resumes at the very next byte. This differs from
/// maximal-subpart substitution, which may swallow up to three bytes.
///
/// ```rust
/// use runebuf::{Rune, decode::decode_rune};
///
/// assert_eq!(decode_rune(b"\xE2\x98\xBA!", false), Some(Rune::from('☺')));
/// assert_eq!(decode_rune(b"\xE2\x98", false), None);
/// assert_eq!(decode_rune(b"\xE2\x98", true), Some(Rune::INVALID));
/// assert_eq!(decode_rune(b"\xFFabc", false), Some(Rune::INVALID));
/// ```
#[must_use]
pub fn decode_rune(bytes: &[u8], at_eof: bool) -> Option<Rune> {
    let &lead = bytes.first()?;
    let (ch, len) = bstr::decode_utf8(bytes);
    match ch {
        #[allow(clippy::cast_possible_truncation)]
        Some(ch) => Some(Rune::Char { ch, len: len as u8 }),
        // The whole window is a valid prefix of a longer sequence.
        None if !at_eof && len == bytes.len() && len < sequence_len(lead) => None,
        None => Some(Rune::INVALID),
    }
}
