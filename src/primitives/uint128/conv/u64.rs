//! Conversions between `Uint128` and 64-bit integers.

use crate::error::RangeError;
use crate::primitives::Uint128;

/// Converts a `u64` into a `Uint128` by zero extension.
impl From<u64> for Uint128 {
    fn from(value: u64) -> Self {
        Uint128::new(0, value)
    }
}

/// Converts an `i64` into a `Uint128` by sign extension.
///
/// The high limb is all ones for negative inputs and zero otherwise.
impl From<i64> for Uint128 {
    fn from(value: i64) -> Self {
        let hi = if value < 0 { u64::MAX } else { 0 };

        Uint128::new(hi, value as u64)
    }
}

/// Builds a `Uint128` from a `(hi, lo)` limb pair.
impl From<(u64, u64)> for Uint128 {
    fn from((hi, lo): (u64, u64)) -> Self {
        Uint128::new(hi, lo)
    }
}

/// Splits a `Uint128` into its `(hi, lo)` limb pair.
impl From<Uint128> for (u64, u64) {
    fn from(value: Uint128) -> Self {
        (value.hi, value.lo)
    }
}

/// Attempts to convert a `Uint128` into a `u64`.
///
/// The conversion succeeds only if the high limb is zero.
impl TryFrom<Uint128> for u64 {
    type Error = RangeError;

    fn try_from(value: Uint128) -> Result<Self, Self::Error> {
        if value.hi != 0 {
            return Err(RangeError { target: "u64" });
        }

        Ok(value.lo)
    }
}

impl Uint128 {
    /// Narrows the value to a `u64`.
    ///
    /// # Errors
    /// Returns [`RangeError`] if the high limb is non-zero.
    pub fn to_u64(&self) -> Result<u64, RangeError> {
        u64::try_from(*self)
    }
}
