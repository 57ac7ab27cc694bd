#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use runebuf::{ChunkedSource, Reader, ReaderOptions, Rune, decode::decode_rune};

#[derive(Debug, Arbitrary)]
enum Op {
    Read,
    Unread,
    Peek(u8),
    Forget,
}

#[derive(Debug, Arbitrary)]
struct Input {
    chunk: u8,
    window: u8,
    ops: Vec<Op>,
    bytes: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Reference: decode the whole input in one go.
    let mut runes = Vec::new();
    let mut rest = &input.bytes[..];
    while let Some(rune) = decode_rune(rest, true) {
        rest = &rest[rune.size()..];
        runes.push(rune);
    }
    let at = |i: usize| runes.get(i).copied().unwrap_or(Rune::Eof);

    let chunk = usize::from(input.chunk).max(1);
    let options = ReaderOptions {
        chunk_size: usize::from(input.window),
        ..Default::default()
    };
    let mut rd = Reader::with_options(ChunkedSource::new(&input.bytes, chunk), options);

    let mut pos = 0usize;
    let mut floor = 0usize;
    for op in input.ops {
        match op {
            Op::Read => {
                let Ok(rune) = rd.read_rune();
                assert_eq!(rune, at(pos), "read at {pos}");
                pos += 1;
            }
            Op::Unread => {
                let ok = rd.unread_rune().is_ok();
                assert_eq!(ok, pos > floor, "unread at {pos} above {floor}");
                if ok {
                    pos -= 1;
                }
            }
            Op::Peek(n) => {
                let n = usize::from(n);
                let want: Vec<Rune> = (pos..pos + n).map(at).collect();
                assert_eq!(rd.peek_runes(n), want, "peek {n} at {pos}");
            }
            Op::Forget => {
                rd.forget();
                floor = pos;
            }
        }
        rd.assert_invariants();
        assert_eq!(rd.recallable(), pos - floor);
    }
});
