//! Configuration system for the trace generators.
//!
//! This module defines every parameter the generators consume. It provides:
//! 1. **Defaults:** Baseline catalogs (locality regions, strides, loop shape, cache geometry).
//! 2. **Structures:** Per-generator config plus the phase mix of the composite trace.
//! 3. **Loading:** JSON deserialization with per-field defaults, followed by validation.
//!
//! Use `Config::default()` for the built-in behaviour or `Config::from_file` for a JSON document.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::constants::{
    ADDR_BITS, ADDR_MASK, DEFAULT_COMPOSITE_OUTPUT, DEFAULT_NUM_ADDRESSES, DEFAULT_SIMPLE_OUTPUT,
};
use crate::common::{Addr, Result, TraceError};
use crate::patterns::PhaseKind;

/// Default configuration constants for the generators.
mod defaults {
    /// Share of the composite trace given to the sequential phase, in percent.
    pub const SEQUENTIAL_PERCENT: u32 = 10;

    /// Share of the composite trace given to the localized-random phase, in percent.
    pub const LOCALITY_PERCENT: u32 = 20;

    /// Share of the composite trace given to the strided phase, in percent.
    pub const STRIDED_PERCENT: u32 = 15;

    /// Share of the composite trace given to the looping phase, in percent.
    pub const LOOPING_PERCENT: u32 = 25;

    /// Share of the composite trace given to the conflict phase, in percent.
    pub const CONFLICT_PERCENT: u32 = 30;

    /// Fixed stride of the sequential phase (one 16-byte line per access).
    pub const SEQUENTIAL_STRIDE: u16 = 16;

    /// Number of locality regions partitioning the address space.
    pub const REGION_COUNT: u16 = 8;

    /// Width of each locality region in addresses.
    pub const REGION_SPAN: u16 = 0x100;

    /// Stride catalog of the strided phase.
    pub const STRIDES: [u16; 4] = [16, 32, 64, 128];

    /// Number of loop segments in the looping phase.
    pub const LOOP_SEGMENTS: usize = 10;

    /// Shortest loop descriptor.
    pub const LOOP_MIN_LEN: usize = 3;

    /// Longest loop descriptor.
    pub const LOOP_MAX_LEN: usize = 5;

    /// Sets of the modeled direct-mapped cache.
    pub const CONFLICT_SETS: u16 = 16;

    /// Line size of the modeled direct-mapped cache (4 offset bits).
    pub const CONFLICT_LINE_BYTES: u16 = 16;

    /// Distinct tags drawn by the conflict phase.
    pub const CONFLICT_TAGS: u16 = 8;
}

/// Root configuration holding both generators' settings.
///
/// # Examples
///
/// ```
/// use tracegen_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.simple.num_addresses, 10_000);
/// assert_eq!(config.composite.regions.len(), 8);
/// ```
///
/// Partial JSON documents fall back to defaults field by field:
///
/// ```
/// use tracegen_core::config::Config;
///
/// let config = Config::from_json_str(r#"{ "composite": { "seed": 7, "strides": [8, 24] } }"#).unwrap();
/// assert_eq!(config.composite.seed, Some(7));
/// assert_eq!(config.composite.strides, vec![8, 24]);
/// assert_eq!(config.composite.mix.looping, 25);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Simple (wrap-around sequential) generator settings
    #[serde(default)]
    pub simple: SimpleConfig,
    /// Composite (five-phase) generator settings
    #[serde(default)]
    pub composite: CompositeConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// The whole document is validated, so an invalid composite section is
    /// rejected even when only the simple settings are wanted.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// Validation covers every section; see [`Config::from_json_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks every section of the document.
    ///
    /// Only the composite section carries catalog invariants; the simple
    /// settings accept any count and path.
    pub fn validate(&self) -> Result<()> {
        self.composite.validate()
    }
}

/// Settings of the simple generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimpleConfig {
    /// Number of addresses to write
    #[serde(default = "default_num_addresses")]
    pub num_addresses: usize,

    /// Destination file; created if absent, truncated if present
    #[serde(default = "SimpleConfig::default_output_file")]
    pub output_file: PathBuf,
}

impl SimpleConfig {
    fn default_output_file() -> PathBuf {
        PathBuf::from(DEFAULT_SIMPLE_OUTPUT)
    }
}

impl Default for SimpleConfig {
    fn default() -> Self {
        Self {
            num_addresses: DEFAULT_NUM_ADDRESSES,
            output_file: Self::default_output_file(),
        }
    }
}

/// Settings of the composite generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompositeConfig {
    /// Base address count; each phase takes a truncated percentage of it
    #[serde(default = "default_num_addresses")]
    pub num_addresses: usize,

    /// Destination file; created if absent, truncated if present
    #[serde(default = "CompositeConfig::default_output_file")]
    pub output_file: PathBuf,

    /// Fixed seed for reproducible traces; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Percent of the base count given to each phase
    #[serde(default)]
    pub mix: PhaseMix,

    /// Stride of the sequential phase
    #[serde(default = "CompositeConfig::default_sequential_stride")]
    pub sequential_stride: u16,

    /// Locality regions sampled by the localized-random phase
    #[serde(default = "LocalityRegion::default_catalog")]
    pub regions: Vec<LocalityRegion>,

    /// Stride catalog sampled per access by the strided phase
    #[serde(default = "CompositeConfig::default_strides")]
    pub strides: Vec<u16>,

    /// Shape of the looping phase
    #[serde(default)]
    pub looping: LoopConfig,

    /// Cache geometry targeted by the conflict phase
    #[serde(default)]
    pub conflict: ConflictConfig,
}

impl CompositeConfig {
    fn default_output_file() -> PathBuf {
        PathBuf::from(DEFAULT_COMPOSITE_OUTPUT)
    }

    fn default_sequential_stride() -> u16 {
        defaults::SEQUENTIAL_STRIDE
    }

    fn default_strides() -> Vec<u16> {
        defaults::STRIDES.to_vec()
    }

    /// Checks the phase mix and every catalog against the 11-bit address space.
    pub fn validate(&self) -> Result<()> {
        self.mix.validate()?;

        if self.regions.is_empty() {
            return Err(TraceError::config("at least one locality region is required"));
        }
        for region in &self.regions {
            region.validate()?;
        }

        if self.strides.is_empty() {
            return Err(TraceError::config("stride catalog must not be empty"));
        }
        if self.strides.contains(&0) {
            return Err(TraceError::config("strides must be non-zero"));
        }

        self.looping.validate()?;
        self.conflict.validate()
    }
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            num_addresses: DEFAULT_NUM_ADDRESSES,
            output_file: Self::default_output_file(),
            seed: None,
            mix: PhaseMix::default(),
            sequential_stride: defaults::SEQUENTIAL_STRIDE,
            regions: LocalityRegion::default_catalog(),
            strides: Self::default_strides(),
            looping: LoopConfig::default(),
            conflict: ConflictConfig::default(),
        }
    }
}

fn default_num_addresses() -> usize {
    DEFAULT_NUM_ADDRESSES
}

/// Percent of the base address count assigned to each composite phase.
///
/// Phase sizes are truncated independently, so the realized total may fall
/// short of the base count when it is not a multiple of 100/gcd(percents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhaseMix {
    /// Sequential phase share
    pub sequential: u32,
    /// Localized-random phase share
    pub locality: u32,
    /// Strided phase share
    pub strided: u32,
    /// Looping phase share
    pub looping: u32,
    /// Conflict phase share
    pub conflict: u32,
}

impl PhaseMix {
    /// Returns the share of a phase in percent.
    pub const fn percent(&self, kind: PhaseKind) -> u32 {
        match kind {
            PhaseKind::Sequential => self.sequential,
            PhaseKind::Locality => self.locality,
            PhaseKind::Strided => self.strided,
            PhaseKind::Looping => self.looping,
            PhaseKind::Conflict => self.conflict,
        }
    }

    /// Sum of all shares.
    pub const fn total(&self) -> u32 {
        self.sequential
            .saturating_add(self.locality)
            .saturating_add(self.strided)
            .saturating_add(self.looping)
            .saturating_add(self.conflict)
    }

    /// Size of one phase: `floor(num_addresses * percent / 100)`.
    ///
    /// Computed as `q * p + r * p / 100` with `num_addresses = 100q + r`, which is
    /// exact and cannot overflow for any `usize` count.
    pub const fn phase_len(&self, kind: PhaseKind, num_addresses: usize) -> usize {
        let pct = self.percent(kind) as usize;
        (num_addresses / 100) * pct + (num_addresses % 100) * pct / 100
    }

    /// Sizes of all phases in emission order.
    pub fn plan(&self, num_addresses: usize) -> Vec<(PhaseKind, usize)> {
        PhaseKind::ALL
            .iter()
            .map(|&kind| (kind, self.phase_len(kind, num_addresses)))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.total() == 100 {
            Ok(())
        } else {
            Err(TraceError::config(format!(
                "phase percentages must sum to 100, got {}",
                self.total()
            )))
        }
    }
}

impl Default for PhaseMix {
    fn default() -> Self {
        Self {
            sequential: defaults::SEQUENTIAL_PERCENT,
            locality: defaults::LOCALITY_PERCENT,
            strided: defaults::STRIDED_PERCENT,
            looping: defaults::LOOPING_PERCENT,
            conflict: defaults::CONFLICT_PERCENT,
        }
    }
}

/// Closed interval `[low, high]` of the address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocalityRegion {
    /// First address of the region
    pub low: u16,
    /// Last address of the region (inclusive)
    pub high: u16,
}

impl LocalityRegion {
    /// Creates a region spanning `low..=high`.
    pub const fn new(low: u16, high: u16) -> Self {
        Self { low, high }
    }

    /// Returns true if `addr` lies within the region bounds.
    pub const fn contains(&self, addr: Addr) -> bool {
        addr.val() >= self.low && addr.val() <= self.high
    }

    /// The eight contiguous 256-address regions covering `0x000..=0x7FF`.
    pub fn default_catalog() -> Vec<Self> {
        (0..defaults::REGION_COUNT)
            .map(|k| {
                let low = k * defaults::REGION_SPAN;
                Self::new(low, low + defaults::REGION_SPAN - 1)
            })
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.low > self.high {
            return Err(TraceError::config(format!(
                "locality region [{:#05X}, {:#05X}] is inverted",
                self.low, self.high
            )));
        }
        if self.high > ADDR_MASK {
            return Err(TraceError::config(format!(
                "locality region [{:#05X}, {:#05X}] exceeds the {ADDR_BITS}-bit address space",
                self.low, self.high
            )));
        }
        Ok(())
    }
}

/// Shape of the looping phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoopConfig {
    /// Number of equal-sized loop segments; the division remainder is dropped
    pub segments: usize,
    /// Shortest loop descriptor
    pub min_len: usize,
    /// Longest loop descriptor (inclusive)
    pub max_len: usize,
}

impl LoopConfig {
    fn validate(&self) -> Result<()> {
        if self.segments == 0 {
            return Err(TraceError::config("looping phase needs at least one segment"));
        }
        if self.min_len == 0 || self.min_len > self.max_len {
            return Err(TraceError::config(format!(
                "loop length range {}..={} is empty or starts at zero",
                self.min_len, self.max_len
            )));
        }
        Ok(())
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            segments: defaults::LOOP_SEGMENTS,
            min_len: defaults::LOOP_MIN_LEN,
            max_len: defaults::LOOP_MAX_LEN,
        }
    }
}

/// Direct-mapped cache geometry that the conflict phase collides against.
///
/// An address is split as `tag | set index | offset`; with the defaults the
/// offset occupies bits 0-3, the set index bits 4-7, and the tag bits 8-10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConflictConfig {
    /// Number of cache sets (power of two)
    pub sets: u16,
    /// Cache line size in bytes (power of two)
    pub line_bytes: u16,
    /// Number of distinct tags to draw
    pub tags: u16,
}

impl ConflictConfig {
    /// Bit position of the set index.
    pub const fn set_shift(&self) -> u32 {
        self.line_bytes.trailing_zeros()
    }

    /// Bit position of the tag.
    pub const fn tag_shift(&self) -> u32 {
        self.set_shift() + self.sets.trailing_zeros()
    }

    fn validate(&self) -> Result<()> {
        if !self.sets.is_power_of_two() || !self.line_bytes.is_power_of_two() {
            return Err(TraceError::config(format!(
                "conflict geometry needs power-of-two sets and line size, got {} sets of {} bytes",
                self.sets, self.line_bytes
            )));
        }
        if self.tags == 0 {
            return Err(TraceError::config("conflict phase needs at least one tag"));
        }
        let highest = (u64::from(self.tags - 1) << self.tag_shift())
            | (u64::from(self.sets - 1) << self.set_shift());
        if highest > u64::from(ADDR_MASK) {
            return Err(TraceError::config(format!(
                "conflict geometry reaches {highest:#X}, beyond the {ADDR_BITS}-bit address space"
            )));
        }
        Ok(())
    }
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            sets: defaults::CONFLICT_SETS,
            line_bytes: defaults::CONFLICT_LINE_BYTES,
            tags: defaults::CONFLICT_TAGS,
        }
    }
}
