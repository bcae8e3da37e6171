//! Common utilities and types shared by every generator.
//!
//! This module provides the building blocks used across the crate. It includes:
//! 1. **Address Type:** A strong type for 11-bit trace addresses.
//! 2. **Constants:** Address-space geometry and invocation defaults.
//! 3. **Error Handling:** The crate error type and `Result` alias.

/// Trace address type.
pub mod addr;

/// Address-space and default-invocation constants.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::Addr;
pub use constants::{ADDR_BITS, ADDR_MASK, ADDR_SPACE};
pub use error::{Result, TraceError};
