//! Property tests for the line protocol.
//!
//! Runs on host only; the crate itself is `no_std`.

use proptest::prelude::*;
use regfifo_protocol::{parse_hex, Command, LineEvent, LineFramer};

/// Lowercase hex rendering without leading zeros
fn to_hex(value: u32) -> Vec<u8> {
    format!("{:x}", value).into_bytes()
}

proptest! {
    /// Any u32 printed as hex parses back to itself
    #[test]
    fn formatted_values_parse_back(value in any::<u32>()) {
        prop_assert_eq!(parse_hex(&to_hex(value)), value);
    }

    /// A non-hex byte ends parsing; nothing after it changes the value
    #[test]
    fn suffix_after_non_hex_is_ignored(
        prefix in proptest::collection::vec(any::<u8>(), 0..12),
        suffix in proptest::collection::vec(any::<u8>(), 0..12),
    ) {
        let base = parse_hex(&prefix);
        let mut joined = prefix.clone();
        joined.push(b'z');
        joined.extend_from_slice(&suffix);
        prop_assert_eq!(parse_hex(&joined), base);
    }

    /// Arbitrary input never panics the parser or the classifier
    #[test]
    fn arbitrary_lines_never_panic(line in proptest::collection::vec(any::<u8>(), 0..32)) {
        let _ = parse_hex(&line);
        let _ = Command::parse(&line);
    }

    /// Every line that fits is delivered intact, with CRs stripped
    #[test]
    fn framer_delivers_lines_that_fit(
        body in proptest::collection::vec(
            any::<u8>().prop_filter("no terminator", |b| *b != b'\n' && *b != b'\r'),
            0..=16,
        ),
        crlf in any::<bool>(),
    ) {
        let mut framer = LineFramer::<16>::new();
        for &b in &body {
            prop_assert_eq!(framer.feed(b), LineEvent::Pending);
        }
        if crlf {
            prop_assert_eq!(framer.feed(b'\r'), LineEvent::Pending);
        }
        prop_assert_eq!(framer.feed(b'\n'), LineEvent::Line(&body[..]));
        prop_assert_eq!(framer.cursor(), 0);
    }

    /// Cursor never exceeds capacity, whatever the stream
    #[test]
    fn framer_cursor_bounded(stream in proptest::collection::vec(any::<u8>(), 0..128)) {
        let mut framer = LineFramer::<8>::new();
        for b in stream {
            if let LineEvent::Line(line) = framer.feed(b) {
                prop_assert!(line.len() <= 8);
            }
            prop_assert!(framer.cursor() <= framer.capacity());
        }
    }

    /// Write commands echo the fixed-width fields they were built from
    #[test]
    fn write_command_fields(id in 0u8..=0xFF, value in any::<u32>()) {
        let mut line = format!("wr{:02x}", id).into_bytes();
        line.extend_from_slice(&to_hex(value));
        prop_assert_eq!(
            Command::parse(&line),
            Some(Command::WriteRegister { id: id as u32, value })
        );
    }
}

#[test]
fn test_read_command_from_framed_stream() {
    let mut framer = LineFramer::<16>::new();
    let mut parsed = None;
    for &b in b"rr2\r\n" {
        if let LineEvent::Line(line) = framer.feed(b) {
            parsed = Command::parse(line);
        }
    }
    assert_eq!(parsed, Some(Command::ReadRegister { id: 2 }));
}
