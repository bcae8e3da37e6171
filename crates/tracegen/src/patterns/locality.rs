//! Localized-Random Pattern.
//!
//! Each access first picks one locality region uniformly, then an address
//! uniformly within that region's inclusive bounds. Accesses are independent;
//! the bias comes only from the region catalog.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use super::{AccessPattern, PhaseKind};
use crate::common::Addr;
use crate::config::LocalityRegion;

/// Random accesses clustered inside a region catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityPattern {
    regions: Vec<LocalityRegion>,
}

impl LocalityPattern {
    /// Creates the pattern over a validated region catalog.
    pub const fn new(regions: Vec<LocalityRegion>) -> Self {
        Self { regions }
    }

    /// The region catalog being sampled.
    pub fn regions(&self) -> &[LocalityRegion] {
        &self.regions
    }
}

impl AccessPattern for LocalityPattern {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Locality
    }

    fn generate(&self, len: usize, rng: &mut StdRng) -> Vec<Addr> {
        let mut out = Vec::with_capacity(len);
        for _ in 0..len {
            let Some(region) = self.regions.choose(rng) else {
                break;
            };
            let raw = rng.random_range(region.low..=region.high);
            out.push(Addr::wrapping(u64::from(raw)));
        }
        out
    }
}
