//! Generation summaries.
//!
//! Both generators return a `TraceSummary` describing what they wrote:
//! 1. **Totals:** Requested base count versus realized line count.
//! 2. **Phase breakdown:** Realized lines per phase, in emission order.
//! 3. **Rendering:** A one-line confirmation via `Display`, a per-phase table via
//!    the alternate form (`{:#}`), and JSON via `serde`.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::patterns::PhaseKind;

/// Which generator produced a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    /// Wrap-around sequential trace
    Simple,
    /// Five-phase mixed trace
    Composite,
}

/// Realized line count of one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseCount {
    /// Phase identifier
    pub kind: PhaseKind,
    /// Lines written for the phase
    pub lines: usize,
}

/// Outcome of one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceSummary {
    /// Generator that produced the trace
    pub kind: TraceKind,
    /// Base address count the run was asked for
    pub requested: usize,
    /// Lines actually written
    pub total: usize,
    /// Destination file, when the run wrote to a path
    pub output: Option<PathBuf>,
    /// Per-phase line counts in emission order
    pub phases: Vec<PhaseCount>,
}

impl TraceSummary {
    /// Creates an empty summary for a run of `requested` addresses.
    pub const fn new(kind: TraceKind, requested: usize) -> Self {
        Self {
            kind,
            requested,
            total: 0,
            output: None,
            phases: Vec::new(),
        }
    }

    /// Records the lines written by one phase.
    pub fn record(&mut self, kind: PhaseKind, lines: usize) {
        self.phases.push(PhaseCount { kind, lines });
        self.total += lines;
    }

    /// Lines lost to per-phase truncation.
    pub const fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.total)
    }

    /// Lines written for `kind`, summed over every matching phase.
    pub fn lines_for(&self, kind: PhaseKind) -> usize {
        self.phases
            .iter()
            .filter(|p| p.kind == kind)
            .map(|p| p.lines)
            .sum()
    }
}

impl fmt::Display for TraceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TraceKind::Simple => write!(
                f,
                "Generated simple trace file with {} addresses",
                self.total
            )?,
            TraceKind::Composite => write!(
                f,
                "Generated trace file with {} memory addresses",
                self.total
            )?,
        }
        if let Some(path) = &self.output {
            write!(f, " ({})", path.display())?;
        }

        if f.alternate() {
            for phase in &self.phases {
                let share = if self.total == 0 {
                    0.0
                } else {
                    phase.lines as f64 / self.total as f64 * 100.0
                };
                write!(
                    f,
                    "\n  {:<12} {:>8} ({:.1}%)",
                    phase.kind.name(),
                    phase.lines,
                    share
                )?;
            }
            if self.shortfall() > 0 {
                write!(f, "\n  truncated    {:>8}", self.shortfall())?;
            }
        }
        Ok(())
    }
}
