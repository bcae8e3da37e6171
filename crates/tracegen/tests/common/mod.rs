//! Shared helpers for trace tests.

use tracegen_core::common::ADDR_MASK;

/// Asserts that `line` is a well-formed record and returns its value.
///
/// A record is exactly three uppercase hex digits whose value fits in 11 bits.
pub fn parse_record(line: &str) -> u16 {
    assert_eq!(line.len(), 3, "record {line:?} is not 3 characters wide");
    assert!(
        line.chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
        "record {line:?} is not uppercase hex"
    );
    let value = u16::from_str_radix(line, 16).unwrap();
    assert!(value <= ADDR_MASK, "record {line:?} is outside the address space");
    value
}

/// Parses a whole trace, checking every record and the trailing newline.
pub fn parse_trace(text: &str) -> Vec<u16> {
    if text.is_empty() {
        return Vec::new();
    }
    assert!(text.ends_with('\n'), "trace must end with a newline");
    text.lines().map(parse_record).collect()
}

/// Converts sink bytes into trace text.
pub fn utf8(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}
