//! Composite Pattern Generator.
//!
//! Writes five phases back to back: sequential, localized-random, strided,
//! looping, and conflict. Phase sizes are `floor(N * percent / 100)` computed
//! independently, so the total can fall slightly short of `N`. The looping
//! phase additionally drops the remainder of its size divided by the segment
//! count.

use std::io::Write;

use rand::rngs::StdRng;
use tracing::{debug, info};

use super::seeded_rng;
use super::writer::TraceWriter;
use crate::common::{Addr, Result};
use crate::config::CompositeConfig;
use crate::patterns::{
    AccessPattern, ConflictPattern, LocalityPattern, LoopPattern, PhaseKind, SequentialPattern,
    StridedPattern,
};
use crate::stats::{TraceKind, TraceSummary};

/// Five-phase mixed-pattern generator.
#[derive(Debug)]
pub struct CompositeGenerator {
    config: CompositeConfig,
    rng: StdRng,
}

impl CompositeGenerator {
    /// Validates the configuration and seeds the random source.
    pub fn new(config: CompositeConfig) -> Result<Self> {
        config.validate()?;
        let rng = seeded_rng(config.seed);
        Ok(Self { config, rng })
    }

    /// The generator's settings.
    pub const fn config(&self) -> &CompositeConfig {
        &self.config
    }

    /// Planned iteration count of each phase, in emission order.
    pub fn plan(&self) -> Vec<(PhaseKind, usize)> {
        self.config.mix.plan(self.config.num_addresses)
    }

    /// The pattern that fills `kind`.
    fn pattern(&self, kind: PhaseKind) -> Box<dyn AccessPattern> {
        match kind {
            PhaseKind::Sequential => Box::new(SequentialPattern::new(self.config.sequential_stride)),
            PhaseKind::Locality => Box::new(LocalityPattern::new(self.config.regions.clone())),
            PhaseKind::Strided => Box::new(StridedPattern::new(self.config.strides.clone())),
            PhaseKind::Looping => Box::new(LoopPattern::new(self.config.looping)),
            PhaseKind::Conflict => Box::new(ConflictPattern::new(self.config.conflict)),
        }
    }

    /// Generates every phase in order without writing it.
    ///
    /// Advances the random source exactly as [`Self::write_to`] would.
    pub fn generate_phases(&mut self) -> Vec<(PhaseKind, Vec<Addr>)> {
        let mut phases = Vec::with_capacity(PhaseKind::ALL.len());
        for (kind, len) in self.plan() {
            let addrs = self.pattern(kind).generate(len, &mut self.rng);
            debug!(phase = %kind, planned = len, emitted = addrs.len(), "phase generated");
            phases.push((kind, addrs));
        }
        phases
    }

    /// Writes the trace to an arbitrary sink.
    pub fn write_to<W: Write>(&mut self, sink: W) -> Result<TraceSummary> {
        self.write_with(TraceWriter::new(sink))
    }

    /// Creates or truncates the configured output file and writes the trace.
    ///
    /// File-system failures are returned unchanged as [`crate::TraceError::Io`].
    pub fn run(&mut self) -> Result<TraceSummary> {
        let path = self.config.output_file.clone();
        let mut summary = self.write_with(TraceWriter::create(&path)?)?;
        info!(
            path = %path.display(),
            lines = summary.total,
            shortfall = summary.shortfall(),
            "composite trace written"
        );
        summary.output = Some(path);
        Ok(summary)
    }

    fn write_with<W: Write>(&mut self, mut writer: TraceWriter<W>) -> Result<TraceSummary> {
        let mut summary = TraceSummary::new(TraceKind::Composite, self.config.num_addresses);
        for (kind, addrs) in self.generate_phases() {
            let lines = writer.write_all(addrs)?;
            summary.record(kind, lines);
        }
        let _sink = writer.finish()?;
        Ok(summary)
    }
}
