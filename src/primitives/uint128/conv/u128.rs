//! Conversions between `Uint128` and the native `u128`.
//!
//! These are lossless in both directions. The arithmetic never depends on
//! them except behind the `speed` feature.

use crate::primitives::Uint128;

impl From<u128> for Uint128 {
    fn from(value: u128) -> Self {
        Uint128::new((value >> 64) as u64, value as u64)
    }
}

impl From<Uint128> for u128 {
    fn from(value: Uint128) -> Self {
        ((value.hi as u128) << 64) | value.lo as u128
    }
}
