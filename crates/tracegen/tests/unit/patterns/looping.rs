//! # Looping Pattern Tests
//!
//! Verifies segment sizing (remainder dropped), descriptor lengths, and the
//! periodicity of every segment.

use rstest::rstest;
use tracegen_core::Addr;
use tracegen_core::config::LoopConfig;
use tracegen_core::generator::seeded_rng;
use tracegen_core::patterns::{AccessPattern, LoopDescriptor, LoopPattern, PhaseKind};

fn default_pattern() -> LoopPattern {
    LoopPattern::new(LoopConfig::default())
}

#[rstest]
#[case(2500, 250)]
#[case(2509, 250)]
#[case(9, 0)]
#[case(0, 0)]
fn segment_len_drops_remainder(#[case] phase: usize, #[case] expected: usize) {
    assert_eq!(default_pattern().segment_len(phase), expected);
}

#[test]
fn phase_emits_ten_whole_segments() {
    let addrs = default_pattern().generate(2509, &mut seeded_rng(Some(31)));
    assert_eq!(addrs.len(), 2500);
}

#[test]
fn descriptor_lengths_stay_in_range() {
    let segments = default_pattern().segments(2500, &mut seeded_rng(Some(32)));
    assert_eq!(segments.len(), 10);
    for segment in &segments {
        assert!((3..=5).contains(&segment.descriptor.len()));
        assert_eq!(segment.iterations, 250);
    }
}

#[test]
fn every_segment_is_periodic_in_its_loop_length() {
    for seed in 0..16 {
        let segments = default_pattern().segments(2500, &mut seeded_rng(Some(seed)));
        for segment in segments {
            let period = segment.descriptor.len();
            let addrs = segment.addresses();
            assert_eq!(addrs.len(), 250);
            assert_eq!(&addrs[..period], segment.descriptor.addrs());
            for i in 0..addrs.len() - period {
                assert_eq!(addrs[i], addrs[i + period], "seed {seed}, index {i}");
            }
        }
    }
}

/// `generate` is the concatenation of the segments drawn from the same seed.
#[test]
fn generate_concatenates_segments() {
    let pattern = default_pattern();
    let flat = pattern.generate(1000, &mut seeded_rng(Some(33)));
    let joined: Vec<Addr> = pattern
        .segments(1000, &mut seeded_rng(Some(33)))
        .iter()
        .flat_map(|s| s.addresses())
        .collect();
    assert_eq!(flat, joined);
}

#[test]
fn all_loop_lengths_occur() {
    let mut lengths = [false; 6];
    for seed in 0..8 {
        for segment in default_pattern().segments(100, &mut seeded_rng(Some(seed))) {
            lengths[segment.descriptor.len()] = true;
        }
    }
    assert_eq!(lengths, [false, false, false, true, true, true]);
}

#[test]
fn replay_cycles_in_order() {
    let addrs: Vec<Addr> = [0x010, 0x7FF, 0x010]
        .iter()
        .map(|&raw| Addr::new(raw).unwrap())
        .collect();
    let descriptor = LoopDescriptor::from_addrs(addrs);
    let replayed: Vec<u16> = descriptor.replay(7).map(Addr::val).collect();
    assert_eq!(replayed, vec![0x010, 0x7FF, 0x010, 0x010, 0x7FF, 0x010, 0x010]);
}

#[test]
fn empty_descriptor_replays_nothing() {
    let descriptor = LoopDescriptor::from_addrs(Vec::new());
    assert!(descriptor.is_empty());
    assert_eq!(descriptor.replay(10).count(), 0);
}

#[test]
fn custom_shape() {
    let pattern = LoopPattern::new(LoopConfig {
        segments: 3,
        min_len: 2,
        max_len: 2,
    });
    let segments = pattern.segments(31, &mut seeded_rng(Some(34)));
    assert_eq!(segments.len(), 3);
    assert!(segments.iter().all(|s| s.descriptor.len() == 2 && s.iterations == 10));
    assert_eq!(pattern.generate(31, &mut seeded_rng(Some(34))).len(), 30);
    assert_eq!(pattern.kind(), PhaseKind::Looping);
}
