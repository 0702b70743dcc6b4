//! Conversions between `Uint128` and 32-bit integers.

use crate::error::RangeError;
use crate::primitives::Uint128;

/// Converts a `u32` into a `Uint128` by zero extension.
impl From<u32> for Uint128 {
    fn from(value: u32) -> Self {
        Uint128::new(0, value as u64)
    }
}

/// Converts an `i32` into a `Uint128` by sign extension.
///
/// Negative inputs become their two's-complement 128-bit representation,
/// so `-1` maps to `Uint128::MAX`.
impl From<i32> for Uint128 {
    fn from(value: i32) -> Self {
        Uint128::from(value as i64)
    }
}

/// Attempts to convert a `Uint128` into a `u32`.
///
/// The conversion succeeds only if the upper 96 bits of the value are zero.
impl TryFrom<Uint128> for u32 {
    type Error = RangeError;

    fn try_from(value: Uint128) -> Result<Self, Self::Error> {
        if value.hi != 0 || value.lo > u32::MAX as u64 {
            return Err(RangeError { target: "u32" });
        }

        Ok(value.lo as u32)
    }
}

impl Uint128 {
    /// Narrows the value to a `u32`.
    ///
    /// # Errors
    /// Returns [`RangeError`] if the value is larger than `u32::MAX`.
    pub fn to_u32(&self) -> Result<u32, RangeError> {
        u32::try_from(*self)
    }
}
