//! Trace address type.
//!
//! Every record in a trace file is an offset into an 11-bit simulated memory space.
//! `Addr` keeps that invariant in the type: it can only be built by wrapping an
//! arbitrary index into the space or by checked construction.

use std::fmt;

use serde::Serialize;

use super::constants::{ADDR_MASK, ADDR_SPACE, HEX_DIGITS};

/// An address in the 11-bit trace address space (`0..=0x7FF`).
///
/// The `Display` form is the trace-file record: three zero-padded uppercase hex digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Addr(u16);

impl Addr {
    /// Lowest address.
    pub const MIN: Self = Self(0);

    /// Highest address (0x7FF).
    pub const MAX: Self = Self(ADDR_MASK);

    /// Creates an address from a raw value, returning `None` outside the address space.
    #[inline]
    pub const fn new(raw: u16) -> Option<Self> {
        if raw <= ADDR_MASK {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Wraps an arbitrary index into the address space (`raw mod 2048`).
    #[inline]
    pub const fn wrapping(raw: u64) -> Self {
        Self((raw % ADDR_SPACE as u64) as u16)
    }

    /// Returns the raw address value.
    #[inline]
    pub const fn val(self) -> u16 {
        self.0
    }
}

impl From<Addr> for u16 {
    fn from(addr: Addr) -> Self {
        addr.0
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$X}", self.0, width = HEX_DIGITS)
    }
}

impl fmt::UpperHex for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
