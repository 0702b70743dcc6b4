//! Comparisons between `Uint128` and signed 64-bit scalars.
//!
//! The scalar is widened with the same sign-extension rule as
//! `From<i64>`, so `-1` compares equal to `Uint128::MAX`.

use super::Uint128;
use std::cmp::Ordering;

impl PartialEq<i64> for Uint128 {
    fn eq(&self, other: &i64) -> bool {
        *self == Uint128::from(*other)
    }
}

impl PartialEq<Uint128> for i64 {
    fn eq(&self, other: &Uint128) -> bool {
        Uint128::from(*self) == *other
    }
}

impl PartialOrd<i64> for Uint128 {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&Uint128::from(*other)))
    }
}

impl PartialOrd<Uint128> for i64 {
    fn partial_cmp(&self, other: &Uint128) -> Option<Ordering> {
        Some(Uint128::from(*self).cmp(other))
    }
}
