//! Trace generators.
//!
//! This module turns configurations into trace files. It provides:
//! 1. **Simple generator:** `N` wrap-around sequential addresses, no randomness.
//! 2. **Composite generator:** five concatenated pattern phases driven by a seedable RNG.
//! 3. **Writer:** the buffered `XXX\n` record sink shared by both.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Five-phase mixed-pattern generator.
pub mod composite;

/// Deterministic wrap-around generator.
pub mod simple;

/// Buffered trace-record writer.
pub mod writer;

pub use composite::CompositeGenerator;
pub use simple::SimpleGenerator;
pub use writer::TraceWriter;

/// Builds the random source of a run.
///
/// A fixed seed gives a reproducible `StdRng`; without one the generator is
/// seeded from operating-system entropy and traces differ between runs.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "seeding trace rng");
            StdRng::seed_from_u64(seed)
        }
        None => {
            debug!("seeding trace rng from os entropy");
            StdRng::from_os_rng()
        }
    }
}
