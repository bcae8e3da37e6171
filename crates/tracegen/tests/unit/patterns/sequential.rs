//! # Sequential Pattern Tests
//!
//! The sweep is fully deterministic: `(i * stride) mod 2048`.

use tracegen_core::generator::seeded_rng;
use tracegen_core::patterns::{AccessPattern, PhaseKind, SequentialPattern};

/// Stride 16 touches a new line per access and wraps after 128 accesses.
#[test]
fn stride_16_wraps_after_128() {
    let pattern = SequentialPattern::new(16);
    let addrs = pattern.generate(1000, &mut seeded_rng(Some(0)));
    assert_eq!(addrs.len(), 1000);
    assert_eq!(addrs[0].to_string(), "000");
    assert_eq!(addrs[1].to_string(), "010");
    assert_eq!(addrs[127].to_string(), "7F0");
    assert_eq!(addrs[128].to_string(), "000");
    for (i, addr) in addrs.iter().enumerate() {
        assert_eq!(u64::from(addr.val()), (i as u64 * 16) % 2048);
    }
}

/// Stride 1 is the simple generator's wrap-around sweep.
#[test]
fn stride_1_counts_through_the_space() {
    let pattern = SequentialPattern::new(1);
    let addrs: Vec<u16> = pattern.addresses(2050).map(|a| a.val()).collect();
    assert_eq!(addrs[2047], 0x7FF);
    assert_eq!(addrs[2048], 0);
    assert_eq!(addrs[2049], 1);
}

#[test]
fn rng_does_not_affect_output() {
    let pattern = SequentialPattern::new(16);
    let a = pattern.generate(300, &mut seeded_rng(Some(1)));
    let b = pattern.generate(300, &mut seeded_rng(Some(2)));
    assert_eq!(a, b);
}

#[test]
fn empty_phase() {
    let pattern = SequentialPattern::new(16);
    assert!(pattern.generate(0, &mut seeded_rng(Some(0))).is_empty());
    assert_eq!(pattern.kind(), PhaseKind::Sequential);
}
