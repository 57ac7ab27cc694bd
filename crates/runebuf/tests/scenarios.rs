#![allow(missing_docs)]
use runebuf::{ChunkedSource, Reader, ReaderOptions, Rune, UnreadError};
use test_log::test;
use tracing::info;

mod common;

use common::{BAD_RUNES, expect_runes};

#[test]
fn hello_then_eof_forever() {
    let mut rd = Reader::new(&b"hello"[..]);

    expect_runes(&mut rd, "hello");
    for _ in 0..10 {
        assert_eq!(rd.read_rune(), Ok(Rune::Eof));
    }
    assert_eq!(rd.recallable(), 15);
}

#[test]
fn single_rune_peek() {
    let mut rd = Reader::new(&b"a"[..]);

    assert_eq!(rd.peek_runes(1), [Rune::from('a')]);
    assert_eq!(rd.peek_runes(1), [Rune::from('a')]);
    assert_eq!(rd.read_rune(), Ok(Rune::from('a')));
    assert_eq!(rd.peek_runes(1), [Rune::Eof]);
}

#[test]
fn bad_runes_unread_and_replay() {
    let want = [
        Rune::from('a'),
        Rune::from('b'),
        Rune::INVALID,
        Rune::from('\u{FFFD}'),
        Rune::INVALID,
        Rune::from('c'),
        Rune::from('d'),
    ];

    for chunk in [1, 2, 3, 64] {
        info!(chunk, "replaying bad runes");
        let mut rd = Reader::new(ChunkedSource::new(BAD_RUNES, chunk));

        let first: Vec<Rune> = (0..want.len()).map(|_| rd.read_rune().unwrap()).collect();
        assert_eq!(first, want);
        assert_eq!(
            first.iter().map(|r| r.size()).collect::<Vec<_>>(),
            [1, 1, 1, 3, 1, 1, 1]
        );

        for _ in 0..6 {
            rd.unread_rune().unwrap();
        }
        let again: Vec<Rune> = (0..6).map(|_| rd.read_rune().unwrap()).collect();
        assert_eq!(again, want[1..]);
    }
}

#[test]
fn forget_then_read_continues() {
    let mut rd = Reader::with_options(
        &b"let x"[..],
        ReaderOptions {
            chunk_size: 1,
            history_capacity: 8,
        },
    );

    expect_runes(&mut rd, "let");
    rd.forget();
    assert_eq!(rd.unread_rune(), Err(UnreadError::NoRuneToUnread));
    expect_runes(&mut rd, " x");
    assert_eq!(rd.read_rune(), Ok(Rune::Eof));
    assert!(rd.is_exhausted());
}

#[test]
fn lexer_style_backtracking() {
    // Try to match "=>" and fall back to "=" by unreading.
    let mut rd = Reader::new("a=b=>c".as_bytes());
    let mut tokens = Vec::new();

    loop {
        let start = rd.position();
        match rd.read_rune().unwrap() {
            Rune::Eof => break,
            r if r == '=' => {
                if rd.read_rune().unwrap() == '>' {
                    tokens.push("=>".to_string());
                } else {
                    rd.unread_rune().unwrap();
                    tokens.push("=".to_string());
                }
            }
            r => tokens.push(r.to_string()),
        }
        assert!(rd.position() > start);
        rd.forget();
    }

    assert_eq!(tokens, ["a", "=", "b", "=>", "c"]);
}

#[test]
fn unread_error_message() {
    let mut rd = Reader::new(&b""[..]);

    let err = rd.unread_rune().unwrap_err();
    assert_eq!(err.to_string(), "no rune to unread");
}
