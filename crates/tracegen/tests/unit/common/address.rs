//! # Address Tests
//!
//! Verifies construction, wrap-around, and the three-digit record rendering
//! of the 11-bit trace address type.

use rstest::rstest;
use tracegen_core::Addr;
use tracegen_core::common::{ADDR_BITS, ADDR_MASK, ADDR_SPACE};

#[test]
fn address_space_geometry() {
    assert_eq!(ADDR_BITS, 11);
    assert_eq!(ADDR_SPACE, 2048);
    assert_eq!(ADDR_MASK, 0x7FF);
    assert_eq!(Addr::MIN.val(), 0);
    assert_eq!(Addr::MAX.val(), 0x7FF);
}

#[test]
fn checked_construction_rejects_out_of_range() {
    assert_eq!(Addr::new(0x7FF).map(Addr::val), Some(0x7FF));
    assert_eq!(Addr::new(0x800), None);
    assert_eq!(Addr::new(u16::MAX), None);
}

#[rstest]
#[case(0, 0)]
#[case(2047, 2047)]
#[case(2048, 0)]
#[case(2049, 1)]
#[case(10_000, 10_000 % 2048)]
#[case(u64::MAX, 0x7FF)]
fn wrapping_reduces_modulo_2048(#[case] raw: u64, #[case] expected: u16) {
    assert_eq!(Addr::wrapping(raw).val(), expected);
}

#[rstest]
#[case(0x000, "000")]
#[case(0x00A, "00A")]
#[case(0x0A3, "0A3")]
#[case(0x150, "150")]
#[case(0x7FF, "7FF")]
fn display_is_three_uppercase_hex_digits(#[case] raw: u16, #[case] expected: &str) {
    let addr = Addr::new(raw).unwrap();
    assert_eq!(addr.to_string(), expected);
}

#[test]
fn upper_hex_is_unpadded() {
    let addr = Addr::new(0x0A3).unwrap();
    assert_eq!(format!("{addr:X}"), "A3");
}

#[test]
fn converts_into_raw_value() {
    let raw: u16 = Addr::wrapping(0x123).into();
    assert_eq!(raw, 0x123);
}

#[test]
fn serializes_as_plain_number() {
    let json = serde_json::to_string(&Addr::wrapping(0x10)).unwrap();
    assert_eq!(json, "16");
}
