//! Access patterns of the composite trace.
//!
//! Each pattern models one memory-access behaviour that a cache simulator should
//! be exercised against. A composite trace concatenates one phase per pattern,
//! in the order of [`PhaseKind::ALL`].
//!
//! The `AccessPattern` trait allows the composite generator to drive every phase
//! through one interface while each pattern keeps its own catalog.

use std::fmt;

use rand::rngs::StdRng;
use serde::Serialize;

use crate::common::Addr;

/// Fixed-stride sweep with wrap-around.
pub mod sequential;

/// Uniform draws inside randomly chosen locality regions.
pub mod locality;

/// Index-scaled addresses with a per-access random stride.
pub mod strided;

/// Short address loops replayed cyclically.
pub mod looping;

/// Addresses colliding in the sets of a direct-mapped cache.
pub mod conflict;

pub use conflict::ConflictPattern;
pub use locality::LocalityPattern;
pub use looping::{LoopDescriptor, LoopPattern, LoopSegment};
pub use sequential::SequentialPattern;
pub use strided::StridedPattern;

/// Identifies a phase of the composite trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// Fixed-stride sweep
    Sequential,
    /// Localized random accesses
    Locality,
    /// Random-stride accesses
    Strided,
    /// Small working-set loops
    Looping,
    /// Set-conflict accesses
    Conflict,
}

impl PhaseKind {
    /// All phases in emission order.
    pub const ALL: [Self; 5] = [
        Self::Sequential,
        Self::Locality,
        Self::Strided,
        Self::Looping,
        Self::Conflict,
    ];

    /// Short lowercase name used in logs and summaries.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Locality => "locality",
            Self::Strided => "strided",
            Self::Looping => "looping",
            Self::Conflict => "conflict",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common interface for all phase patterns.
pub trait AccessPattern {
    /// The phase this pattern fills.
    fn kind(&self) -> PhaseKind;

    /// Produces exactly `len` addresses for one phase.
    ///
    /// The looping pattern is the exception: it drops the remainder of
    /// `len` divided by its segment count.
    ///
    /// # Arguments
    ///
    /// * `len` - Number of iterations in the phase.
    /// * `rng` - Random source; deterministic patterns ignore it.
    fn generate(&self, len: usize, rng: &mut StdRng) -> Vec<Addr>;
}
