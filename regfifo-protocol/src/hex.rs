//! Permissive hexadecimal argument parsing
//!
//! Command arguments are parsed the way `strtoul(s, NULL, 16)` does it:
//! malformed input never fails, it simply yields whatever value was
//! accumulated before the first non-hex character. Host tooling relies on
//! this, so it must stay permissive.

/// Parse a base-16 unsigned value from the start of `bytes`
///
/// - leading ASCII whitespace is skipped
/// - an optional `+` or `-` sign is accepted (`-` negates with wraparound)
/// - an optional `0x`/`0X` prefix is skipped when a hex digit follows it
/// - parsing stops at the first non-hex byte, including the zero sentinel
/// - values beyond `u32::MAX` saturate
///
/// Input with no hex digits yields 0.
pub fn parse_hex(bytes: &[u8]) -> u32 {
    let mut rest = bytes;
    while let [first, tail @ ..] = rest {
        if !is_space(*first) {
            break;
        }
        rest = tail;
    }

    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };

    if let [b'0', b'x' | b'X', next, ..] = rest {
        if next.is_ascii_hexdigit() {
            rest = &rest[2..];
        }
    }

    let mut value: u32 = 0;
    let mut saturated = false;
    for &byte in rest {
        let Some(digit) = hex_digit(byte) else {
            break;
        };
        match value.checked_mul(16).and_then(|v| v.checked_add(digit)) {
            Some(next) => value = next,
            None => saturated = true,
        }
    }

    if saturated {
        u32::MAX
    } else if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Value of a single hex digit
fn hex_digit(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u32),
        b'a'..=b'f' => Some((byte - b'a' + 10) as u32),
        b'A'..=b'F' => Some((byte - b'A' + 10) as u32),
        _ => None,
    }
}

/// C `isspace` in the default locale
fn is_space(byte: u8) -> bool {
    byte == b' ' || (b'\t'..=b'\r').contains(&byte)
}
