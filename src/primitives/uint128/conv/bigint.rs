//! Conversions between `Uint128` and `num_bigint::BigUint`.
//!
//! Values in `[0, 2¹²⁸)` round-trip losslessly. Big integers that need more
//! than 128 bits are rejected rather than truncated.

use crate::error::ConversionError;
use crate::primitives::Uint128;

use num_bigint::BigUint;

/// Converts a `Uint128` into a `BigUint`.
///
/// The limbs are handed over as little-endian 32-bit digits.
impl From<Uint128> for BigUint {
    fn from(value: Uint128) -> Self {
        BigUint::from_slice(&[
            value.lo as u32,
            (value.lo >> 32) as u32,
            value.hi as u32,
            (value.hi >> 32) as u32,
        ])
    }
}

/// Attempts to convert a `BigUint` into a `Uint128`.
///
/// Fails with [`ConversionError::Overflow`] if the value needs more than
/// 128 bits.
impl TryFrom<&BigUint> for Uint128 {
    type Error = ConversionError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        if value.bits() > u64::from(Uint128::BITS) {
            return Err(ConversionError::Overflow);
        }

        let digits = value.to_u64_digits();
        let lo = digits.first().copied().unwrap_or(0);
        let hi = digits.get(1).copied().unwrap_or(0);

        Ok(Uint128::new(hi, lo))
    }
}

impl TryFrom<BigUint> for Uint128 {
    type Error = ConversionError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        Uint128::try_from(&value)
    }
}
