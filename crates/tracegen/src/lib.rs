//! Synthetic memory-address trace generator.
//!
//! This crate produces line-oriented trace files that drive an external cache simulator.
//! It provides the following:
//! 1. **Addresses:** An 11-bit address type rendered as three uppercase hex digits.
//! 2. **Patterns:** Sequential, localized-random, strided, looping, and set-conflict streams.
//! 3. **Generators:** A deterministic wrap-around generator and a five-phase composite generator.
//! 4. **Configuration:** Serde-backed catalogs (regions, strides, loop shape, cache geometry).
//! 5. **Reporting:** Per-phase line counts for the completion summary.

/// Common types and constants (addresses, address space, errors).
pub mod common;
/// Generator configuration (defaults, catalogs, JSON loading, validation).
pub mod config;
/// Trace generators and the buffered trace writer.
pub mod generator;
/// Access patterns emitted by the composite generator's phases.
pub mod patterns;
/// Completion summaries for generator runs.
pub mod stats;

/// Trace address type; construct with `Addr::wrapping` or `Addr::new`.
pub use crate::common::{Addr, Result, TraceError};
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// The two generators exposed by the crate.
pub use crate::generator::{CompositeGenerator, SimpleGenerator};
/// Run summary returned by both generators.
pub use crate::stats::TraceSummary;
