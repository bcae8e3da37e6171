//! Sequential Pattern.
//!
//! Emits `(i * stride) mod 2048` for the phase-local index `i`. With stride 16
//! this touches a new 16-byte line on every access and wraps after 128 accesses;
//! with stride 1 it is the wrap-around sweep of the simple generator.

use rand::rngs::StdRng;

use super::{AccessPattern, PhaseKind};
use crate::common::Addr;

/// Deterministic fixed-stride sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequentialPattern {
    stride: u16,
}

impl SequentialPattern {
    /// Creates a sweep advancing `stride` addresses per access.
    pub const fn new(stride: u16) -> Self {
        Self { stride }
    }

    /// Address at phase-local index `i`.
    #[inline]
    pub const fn at(&self, i: u64) -> Addr {
        Addr::wrapping(i.wrapping_mul(self.stride as u64))
    }

    /// Lazily yields the first `len` addresses of the sweep.
    pub fn addresses(&self, len: usize) -> impl Iterator<Item = Addr> + use<> {
        let pattern = *self;
        (0..len as u64).map(move |i| pattern.at(i))
    }
}

impl AccessPattern for SequentialPattern {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Sequential
    }

    fn generate(&self, len: usize, _rng: &mut StdRng) -> Vec<Addr> {
        self.addresses(len).collect()
    }
}
