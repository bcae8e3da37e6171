//! Strided Pattern.
//!
//! A stride is drawn from the catalog on every access (not once per phase) and
//! scaled by the phase-local index: `(i * stride) mod 2048`. The result mixes
//! several regular strides, which defeats single-stride prefetch detection.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use super::{AccessPattern, PhaseKind};
use crate::common::Addr;

/// Random-stride accesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StridedPattern {
    strides: Vec<u16>,
}

impl StridedPattern {
    /// Creates the pattern over a non-empty stride catalog.
    pub const fn new(strides: Vec<u16>) -> Self {
        Self { strides }
    }

    /// The stride catalog being sampled.
    pub fn strides(&self) -> &[u16] {
        &self.strides
    }
}

impl AccessPattern for StridedPattern {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Strided
    }

    fn generate(&self, len: usize, rng: &mut StdRng) -> Vec<Addr> {
        let mut out = Vec::with_capacity(len);
        for i in 0..len as u64 {
            let Some(&stride) = self.strides.choose(rng) else {
                break;
            };
            out.push(Addr::wrapping(i.wrapping_mul(u64::from(stride))));
        }
        out
    }
}
