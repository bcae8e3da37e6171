//! Conflict Pattern.
//!
//! Synthesizes addresses that collide in a direct-mapped cache. Every access
//! draws a set index and a tag uniformly and composes
//! `(tag << tag_shift) | (set << set_shift)` with a zero line offset. With the
//! default 16-set, 16-byte-line geometry this is `(tag << 8) | (set << 4)`, so
//! up to eight distinct lines compete for each set.

use rand::Rng;
use rand::rngs::StdRng;

use super::{AccessPattern, PhaseKind};
use crate::common::Addr;
use crate::config::ConflictConfig;

/// Set-conflict accesses against a direct-mapped cache geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictPattern {
    geometry: ConflictConfig,
}

impl ConflictPattern {
    /// Creates the pattern for a validated cache geometry.
    pub const fn new(geometry: ConflictConfig) -> Self {
        Self { geometry }
    }

    /// Composes the line-aligned address of `tag` in `set`.
    #[inline]
    pub const fn compose(&self, tag: u16, set: u16) -> Addr {
        let raw = ((tag as u64) << self.geometry.tag_shift())
            | ((set as u64) << self.geometry.set_shift());
        Addr::wrapping(raw)
    }

    /// Set index of `addr` under this geometry.
    #[inline]
    pub const fn set_of(&self, addr: Addr) -> u16 {
        (addr.val() >> self.geometry.set_shift()) & (self.geometry.sets - 1)
    }

    /// Tag of `addr` under this geometry.
    #[inline]
    pub const fn tag_of(&self, addr: Addr) -> u16 {
        addr.val() >> self.geometry.tag_shift()
    }
}

impl AccessPattern for ConflictPattern {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Conflict
    }

    fn generate(&self, len: usize, rng: &mut StdRng) -> Vec<Addr> {
        (0..len)
            .map(|_| {
                let set = rng.random_range(0..self.geometry.sets);
                let tag = rng.random_range(0..self.geometry.tags);
                self.compose(tag, set)
            })
            .collect()
    }
}
