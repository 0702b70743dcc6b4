//! Multiplication and division on two 64-bit limbs
//!
//! The portable path never relies on a native double-width integer: the
//! 64×64 → 128-bit partial product is assembled from 32-bit halves, and
//! division is a restoring shift-and-subtract loop. With the `speed`
//! feature the same functions delegate to native `u128` arithmetic.

use super::Uint128;
use crate::error::DivideByZeroError;

/// Full 64×64 → 128-bit product of two limbs.
#[cfg(not(feature = "speed"))]
pub(super) const fn mul_64x64(a: u64, b: u64) -> Uint128 {
    const MASK: u64 = 0xFFFF_FFFF;

    let (a_hi, a_lo) = (a >> 32, a & MASK);
    let (b_hi, b_lo) = (b >> 32, b & MASK);

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    // At most 3 · (2³² − 1), so no overflow.
    let cross = (ll >> 32) + (lh & MASK) + (hl & MASK);

    let lo = (cross << 32) | (ll & MASK);
    let hi = hh + (lh >> 32) + (hl >> 32) + (cross >> 32);

    Uint128::new(hi, lo)
}

/// Full 64×64 → 128-bit product of two limbs (native fast path).
#[cfg(feature = "speed")]
pub(super) const fn mul_64x64(a: u64, b: u64) -> Uint128 {
    let product = a as u128 * b as u128;

    Uint128::new((product >> 64) as u64, product as u64)
}

/// Product modulo 2¹²⁸.
///
/// Only the low limb of the two cross products can reach the result, and
/// `hi · hi` lies entirely above bit 128.
#[cfg(not(feature = "speed"))]
pub(super) fn wrapping_mul(a: Uint128, b: Uint128) -> Uint128 {
    let low = mul_64x64(a.lo, b.lo);
    let cross = a.lo.wrapping_mul(b.hi).wrapping_add(a.hi.wrapping_mul(b.lo));

    Uint128::new(low.hi.wrapping_add(cross), low.lo)
}

/// Product modulo 2¹²⁸ (native fast path).
#[cfg(feature = "speed")]
pub(super) fn wrapping_mul(a: Uint128, b: Uint128) -> Uint128 {
    Uint128::from(u128::from(a).wrapping_mul(u128::from(b)))
}

/// Exact 256-bit product, returned as `(low, high)` halves.
pub(super) fn widening_mul(a: Uint128, b: Uint128) -> (Uint128, Uint128) {
    let p00 = mul_64x64(a.lo, b.lo);
    let p01 = mul_64x64(a.lo, b.hi);
    let p10 = mul_64x64(a.hi, b.lo);
    let p11 = mul_64x64(a.hi, b.hi);

    // Bits 64..128: three limbs summed, carry lands in `mid.hi` (at most 2).
    let mid = Uint128::from(p00.hi) + Uint128::from(p01.lo) + Uint128::from(p10.lo);

    // Bits 128..256. The exact product is below 2²⁵⁶, so this cannot wrap.
    let high = p11 + Uint128::from(p01.hi) + Uint128::from(p10.hi) + Uint128::from(mid.hi);

    (Uint128::new(mid.lo, p00.lo), high)
}

/// Quotient and remainder of `dividend / divisor`.
///
/// The divisor must be non-zero; callers check this before dispatching.
#[cfg(not(feature = "speed"))]
pub(super) fn div_rem(dividend: Uint128, divisor: Uint128) -> (Uint128, Uint128) {
    debug_assert!(!divisor.is_zero());

    if dividend < divisor {
        return (Uint128::ZERO, dividend);
    }

    // divisor <= dividend, so both fit in one limb.
    if dividend.hi == 0 {
        return (
            Uint128::from(dividend.lo / divisor.lo),
            Uint128::from(dividend.lo % divisor.lo),
        );
    }

    let mut quotient = Uint128::ZERO;
    let mut remainder = Uint128::ZERO;

    // Leading zero bits of the dividend contribute nothing.
    let bits = Uint128::BITS - dividend.leading_zeros();

    // The partial remainder never exceeds the dividend prefix consumed so
    // far, which is below 2¹²⁷ before the last shift, so `<< 1` cannot lose
    // a bit.
    for bit in (0..bits).rev() {
        remainder = remainder << 1u32;
        remainder.lo |= dividend.bit(bit);
        quotient = quotient << 1u32;

        if remainder >= divisor {
            remainder = remainder - divisor;
            quotient.lo |= 1;
        }
    }

    (quotient, remainder)
}

/// Quotient and remainder of `dividend / divisor` (native fast path).
#[cfg(feature = "speed")]
pub(super) fn div_rem(dividend: Uint128, divisor: Uint128) -> (Uint128, Uint128) {
    debug_assert!(!divisor.is_zero());

    let (a, b) = (u128::from(dividend), u128::from(divisor));

    (Uint128::from(a / b), Uint128::from(a % b))
}

impl Uint128 {
    /// Value of bit `index` (0 = least significant) as `0` or `1`.
    #[cfg(not(feature = "speed"))]
    const fn bit(&self, index: u32) -> u64 {
        if index < 64 {
            (self.lo >> index) & 1
        } else {
            (self.hi >> (index - 64)) & 1
        }
    }

    /// Multiplies two values without truncation.
    ///
    /// Returns the 256-bit product as `(low, high)`, where `high` holds bits
    /// 128..256. `high` is zero exactly when the wrapping product would not
    /// have overflowed.
    pub fn widening_mul(self, rhs: Self) -> (Self, Self) {
        widening_mul(self, rhs)
    }

    /// Computes the exact 256-bit product of `a` and `b`.
    ///
    /// The upper 128 bits are written to `result_hi` and the lower 128 bits
    /// to `result_lo`.
    pub fn full_product(a: &Self, b: &Self, result_hi: &mut Self, result_lo: &mut Self) {
        let (lo, hi) = widening_mul(*a, *b);

        *result_hi = hi;
        *result_lo = lo;
    }

    /// Divides `self` by `rhs`, returning `(quotient, remainder)`.
    ///
    /// On success `self == rhs * quotient + remainder` and
    /// `remainder < rhs`.
    ///
    /// # Errors
    /// Returns [`DivideByZeroError`] if `rhs` is zero.
    pub fn div_rem(self, rhs: Self) -> Result<(Self, Self), DivideByZeroError> {
        if rhs.is_zero() {
            return Err(DivideByZeroError);
        }

        Ok(div_rem(self, rhs))
    }

    /// Quotient of `self / rhs`, or [`DivideByZeroError`] if `rhs` is zero.
    pub fn try_div(self, rhs: Self) -> Result<Self, DivideByZeroError> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Remainder of `self / rhs`, or [`DivideByZeroError`] if `rhs` is zero.
    pub fn try_rem(self, rhs: Self) -> Result<Self, DivideByZeroError> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }
}
