#![allow(missing_docs, dead_code)]

use runebuf::{ByteSource, Reader, Rune};

/// `a b <ff> <encoded U+FFFD> <ff> c d`
pub const BAD_RUNES: &[u8] = b"ab\xff\xEF\xBF\xBD\xffcd";

/// Reads the runes of `text` one by one, panicking on the first mismatch.
#[track_caller]
pub fn expect_runes<S>(rd: &mut Reader<S>, text: &str)
where
    S: ByteSource,
    S::Error: std::fmt::Debug,
{
    for (i, ch) in text.chars().enumerate() {
        let got = rd.read_rune().expect("source failed");
        assert_eq!(got, Rune::from(ch), "rune {i} of {text:?}");
    }
}
