//! A rune reader for hand-written lexers and parsers.
//!
//! [`Reader`] wraps a byte stream and hands out decoded Unicode scalar values
//! one at a time. Unlike a plain UTF-8 decoder it can:
//!
//! - give back any number of previously read runes ([`Reader::unread_rune`]),
//! - look ahead any distance without consuming ([`Reader::peek_runes`]),
//! - drop rewind history once a token is committed ([`Reader::forget`]).
//!
//! Malformed input never fails: every byte that cannot start a valid sequence
//! decodes to U+FFFD with a length of one byte, so it can be told apart from
//! an encoded U+FFFD (three bytes).
//!
//! ```rust
//! use runebuf::{Reader, Rune};
//!
//! let mut rd = Reader::new(&b"ab"[..]);
//! assert_eq!(rd.peek_runes(3), [Rune::from('a'), Rune::from('b'), Rune::Eof]);
//! assert_eq!(rd.read_rune(), Ok(Rune::from('a')));
//! rd.unread_rune().unwrap();
//! assert_eq!(rd.read_rune(), Ok(Rune::from('a')));
//! assert_eq!(rd.read_rune(), Ok(Rune::from('b')));
//! assert_eq!(rd.read_rune(), Ok(Rune::Eof));
//! assert_eq!(rd.read_rune(), Ok(Rune::Eof));
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod chunk_utils;
pub mod decode;
mod error;
mod options;
mod reader;
mod rune;
mod source;
mod window;

#[cfg(test)]
mod tests;

pub use chunk_utils::ChunkedSource;
pub use error::UnreadError;
pub use options::ReaderOptions;
pub use reader::{Position, Reader, Runes};
pub use rune::Rune;
#[cfg(feature = "std")]
pub use source::IoSource;
pub use source::{ByteSource, Filled};
