//! Simple Generator.
//!
//! Writes `N` lines where line `i` holds `i mod 2048`. There is no randomness,
//! so the output is fully determined by `N`; `N = 0` yields an empty file.

use std::io::Write;

use tracing::info;

use super::writer::TraceWriter;
use crate::common::Result;
use crate::config::SimpleConfig;
use crate::patterns::{PhaseKind, SequentialPattern};
use crate::stats::{TraceKind, TraceSummary};

/// Stride of the wrap-around sweep.
const SIMPLE_STRIDE: u16 = 1;

/// Deterministic wrap-around sequential generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleGenerator {
    config: SimpleConfig,
    pattern: SequentialPattern,
}

impl SimpleGenerator {
    /// Creates a generator for the given settings.
    pub const fn new(config: SimpleConfig) -> Self {
        Self {
            config,
            pattern: SequentialPattern::new(SIMPLE_STRIDE),
        }
    }

    /// The generator's settings.
    pub const fn config(&self) -> &SimpleConfig {
        &self.config
    }

    /// Writes the trace to an arbitrary sink.
    pub fn write_to<W: Write>(&self, sink: W) -> Result<TraceSummary> {
        self.write_with(TraceWriter::new(sink))
    }

    /// Creates or truncates the configured output file and writes the trace.
    ///
    /// File-system failures are returned unchanged as [`crate::TraceError::Io`].
    pub fn run(&self) -> Result<TraceSummary> {
        let path = &self.config.output_file;
        let mut summary = self.write_with(TraceWriter::create(path)?)?;
        summary.output = Some(path.clone());
        info!(path = %path.display(), lines = summary.total, "simple trace written");
        Ok(summary)
    }

    fn write_with<W: Write>(&self, mut writer: TraceWriter<W>) -> Result<TraceSummary> {
        let lines = writer.write_all(self.pattern.addresses(self.config.num_addresses))?;
        let _sink = writer.finish()?;

        let mut summary = TraceSummary::new(TraceKind::Simple, self.config.num_addresses);
        summary.record(PhaseKind::Sequential, lines);
        Ok(summary)
    }
}

impl Default for SimpleGenerator {
    fn default() -> Self {
        Self::new(SimpleConfig::default())
    }
}
