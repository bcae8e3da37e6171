//! Global address-space constants.
//!
//! This module defines the constants shared by all generators. It includes:
//! 1. **Address Space:** Width, size, and mask of the simulated memory space.
//! 2. **Rendering:** Number of hex digits written per trace line.
//! 3. **Invocation Defaults:** Address counts and output paths used by the CLI.

/// Number of address bits in the simulated memory space.
pub const ADDR_BITS: u32 = 11;

/// Number of distinct addresses (2048).
pub const ADDR_SPACE: u16 = 1 << ADDR_BITS;

/// Mask selecting the valid address bits (0x7FF).
pub const ADDR_MASK: u16 = ADDR_SPACE - 1;

/// Hex digits per trace line; wide enough for `ADDR_MASK`.
pub const HEX_DIGITS: usize = 3;

/// Default number of addresses requested from either generator.
pub const DEFAULT_NUM_ADDRESSES: usize = 10_000;

/// Default output path of the simple generator.
pub const DEFAULT_SIMPLE_OUTPUT: &str = "test/simple_trace.txt";

/// Default output path of the composite generator.
pub const DEFAULT_COMPOSITE_OUTPUT: &str = "test/large_trace.txt";
