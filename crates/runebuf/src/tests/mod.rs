
use alloc::{string::String, vec::Vec};

use crate::{ByteSource, Filled, Reader, Rune};

/// Reads one rune and checks it against `want` (decoded from its own UTF-8
/// encoding, or end of stream).
#[track_caller]
pub(crate) fn assume_rune<S: ByteSource>(rd: &mut Reader<S>, want: impl Into<Rune>)
where
    S::Error: core::fmt::Debug,
{
    let want = want.into();
    match rd.read_rune() {
        Ok(got) => assert_eq!(got, want, "read_rune() = {got:?}, wanted {want:?}"),
        Err(e) => panic!("read_rune() failed with {e:?}, wanted {want:?}"),
    }
}

#[track_caller]
pub(crate) fn assume_bad_rune<S: ByteSource>(rd: &mut Reader<S>)
where
    S::Error: core::fmt::Debug,
{
    assume_rune(rd, Rune::INVALID);
}

/// Reads until end of stream.
pub(crate) fn read_all<S: ByteSource>(rd: &mut Reader<S>) -> Vec<Rune>
where
    S::Error: core::fmt::Debug,
{
    let mut out = Vec::new();
    loop {
        match rd.read_rune() {
            Ok(Rune::Eof) => return out,
            Ok(rune) => out.push(rune),
            Err(e) => panic!("unexpected source error {e:?}"),
        }
    }
}

/// Serves `payload` through an inner slice source, then fails every fill
/// after the first `fail_after` ones.
pub(crate) struct FailingSource<'a> {
    inner: &'a [u8],
    fail_after: usize,
    fills: usize,
}

impl<'a> FailingSource<'a> {
    pub(crate) fn new(inner: &'a [u8], fail_after: usize) -> Self {
        Self {
            inner,
            fail_after,
            fills: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReadFailure(pub(crate) String);

impl ByteSource for FailingSource<'_> {
    type Error = ReadFailure;

    fn fill(&mut self, buf: &mut [u8]) -> Result<Filled, Self::Error> {
        if self.fills < self.fail_after {
            self.fills += 1;
            return Ok(self.inner.fill(buf).unwrap_or_else(|e| match e {}));
        }
        Err(ReadFailure("expected read failure".into()))
    }
}
