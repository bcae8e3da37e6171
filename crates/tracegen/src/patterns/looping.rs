//! Looping Pattern.
//!
//! Emulates tight instruction/data loops. The phase is split into a fixed number
//! of equal segments (the division remainder is dropped). Each segment draws a
//! loop length from the configured range, fills a [`LoopDescriptor`] with that
//! many uniformly drawn addresses (duplicates allowed), and replays it
//! cyclically: iteration `k` of the segment emits `descriptor[k mod len]`.

use rand::Rng;
use rand::rngs::StdRng;

use super::{AccessPattern, PhaseKind};
use crate::common::{ADDR_MASK, Addr};
use crate::config::LoopConfig;

/// Small address pool replayed by one loop segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopDescriptor {
    addrs: Vec<Addr>,
}

impl LoopDescriptor {
    /// Draws `len` independent addresses from the full address space.
    pub fn draw(len: usize, rng: &mut StdRng) -> Self {
        let addrs = (0..len)
            .map(|_| Addr::wrapping(u64::from(rng.random_range(0..=ADDR_MASK))))
            .collect();
        Self { addrs }
    }

    /// Builds a descriptor from fixed addresses.
    pub const fn from_addrs(addrs: Vec<Addr>) -> Self {
        Self { addrs }
    }

    /// Loop length (period of the replayed sequence).
    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    /// Returns true for a descriptor with no addresses.
    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }

    /// The addresses in replay order.
    pub fn addrs(&self) -> &[Addr] {
        &self.addrs
    }

    /// Yields `iterations` addresses, cycling through the descriptor in order.
    pub fn replay(&self, iterations: usize) -> impl Iterator<Item = Addr> + '_ {
        self.addrs.iter().copied().cycle().take(iterations)
    }
}

/// One segment of the looping phase: a descriptor and its iteration count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopSegment {
    /// The replayed address pool
    pub descriptor: LoopDescriptor,
    /// Number of addresses the segment emits
    pub iterations: usize,
}

impl LoopSegment {
    /// Expands the segment into its emitted addresses.
    pub fn addresses(&self) -> Vec<Addr> {
        self.descriptor.replay(self.iterations).collect()
    }
}

/// Loop-locality pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopPattern {
    shape: LoopConfig,
}

impl LoopPattern {
    /// Creates the pattern from a validated loop shape.
    pub const fn new(shape: LoopConfig) -> Self {
        Self { shape }
    }

    /// Iterations per segment for a phase of `len` accesses.
    pub const fn segment_len(&self, len: usize) -> usize {
        match len.checked_div(self.shape.segments) {
            Some(n) => n,
            None => 0,
        }
    }

    /// Draws every segment of a phase of `len` accesses.
    pub fn segments(&self, len: usize, rng: &mut StdRng) -> Vec<LoopSegment> {
        let iterations = self.segment_len(len);
        (0..self.shape.segments)
            .map(|_| {
                let loop_len = rng.random_range(self.shape.min_len..=self.shape.max_len);
                LoopSegment {
                    descriptor: LoopDescriptor::draw(loop_len, rng),
                    iterations,
                }
            })
            .collect()
    }
}

impl AccessPattern for LoopPattern {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Looping
    }

    fn generate(&self, len: usize, rng: &mut StdRng) -> Vec<Addr> {
        let mut out = Vec::with_capacity(self.segment_len(len) * self.shape.segments);
        for segment in self.segments(len, rng) {
            out.extend(segment.descriptor.replay(segment.iterations));
        }
        out
    }
}
