//! Arithmetic and bitwise operations for `Uint128`
//!
//! This module implements the operator traits for `Uint128`. Every operation
//! works limb by limb with:
//! - no heap allocation
//! - wrapping semantics on overflow (add, sub, neg, mul, shifts)
//! - no native shift by 64 or more bits on a single limb
//!
//! `/` and `%` panic on a zero divisor like native integers; use
//! [`Uint128::div_rem`] for a fallible form.

use super::Uint128;
use super::arith;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

/// Bitwise complement of both limbs.
impl Not for Uint128 {
    type Output = Uint128;

    fn not(self) -> Self::Output {
        Uint128::new(!self.hi, !self.lo)
    }
}

impl BitAnd<Uint128> for Uint128 {
    type Output = Uint128;

    fn bitand(self, rhs: Uint128) -> Self::Output {
        Uint128::new(self.hi & rhs.hi, self.lo & rhs.lo)
    }
}

impl BitOr<Uint128> for Uint128 {
    type Output = Uint128;

    fn bitor(self, rhs: Uint128) -> Self::Output {
        Uint128::new(self.hi | rhs.hi, self.lo | rhs.lo)
    }
}

impl BitXor<Uint128> for Uint128 {
    type Output = Uint128;

    fn bitxor(self, rhs: Uint128) -> Self::Output {
        Uint128::new(self.hi ^ rhs.hi, self.lo ^ rhs.lo)
    }
}

/// Clamps a 128-bit shift amount; anything at or above 128 maps to 128.
const fn shift_amount(rhs: Uint128) -> u32 {
    if rhs.hi != 0 || rhs.lo >= 128 {
        128
    } else {
        rhs.lo as u32
    }
}

const fn shl_bits(value: Uint128, shift: u32) -> Uint128 {
    match shift {
        0 => value,
        1..=63 => Uint128::new(
            (value.hi << shift) | (value.lo >> (64 - shift)),
            value.lo << shift,
        ),
        64..=127 => Uint128::new(value.lo << (shift - 64), 0),
        _ => Uint128::ZERO,
    }
}

const fn shr_bits(value: Uint128, shift: u32) -> Uint128 {
    match shift {
        0 => value,
        1..=63 => Uint128::new(
            value.hi >> shift,
            (value.lo >> shift) | (value.hi << (64 - shift)),
        ),
        64..=127 => Uint128::new(0, value.hi >> (shift - 64)),
        _ => Uint128::ZERO,
    }
}

/// Logical left shift (`<<`) by a 128-bit value.
///
/// Shifts greater than or equal to 128 bits yield zero.
impl Shl<Uint128> for Uint128 {
    type Output = Uint128;

    fn shl(self, rhs: Uint128) -> Self::Output {
        shl_bits(self, shift_amount(rhs))
    }
}

/// Logical right shift (`>>`) by a 128-bit value.
///
/// Shifts greater than or equal to 128 bits yield zero.
impl Shr<Uint128> for Uint128 {
    type Output = Uint128;

    fn shr(self, rhs: Uint128) -> Self::Output {
        shr_bits(self, shift_amount(rhs))
    }
}

impl Shl<u32> for Uint128 {
    type Output = Uint128;

    fn shl(self, rhs: u32) -> Self::Output {
        shl_bits(self, rhs)
    }
}

impl Shr<u32> for Uint128 {
    type Output = Uint128;

    fn shr(self, rhs: u32) -> Self::Output {
        shr_bits(self, rhs)
    }
}

/// Addition modulo 2¹²⁸.
///
/// The carry out of the low limb is detected by the wrapped sum being
/// smaller than an operand.
impl Add for Uint128 {
    type Output = Uint128;

    fn add(self, rhs: Uint128) -> Self::Output {
        let lo = self.lo.wrapping_add(rhs.lo);
        let carry = (lo < self.lo) as u64;

        Uint128::new(self.hi.wrapping_add(rhs.hi).wrapping_add(carry), lo)
    }
}

/// Two's-complement negation: complement both limbs, then add one.
impl Neg for Uint128 {
    type Output = Uint128;

    fn neg(self) -> Self::Output {
        (!self).succ()
    }
}

/// Subtraction modulo 2¹²⁸, computed as `self + (-rhs)`.
impl Sub for Uint128 {
    type Output = Uint128;

    fn sub(self, rhs: Uint128) -> Self::Output {
        self + -rhs
    }
}

/// Multiplication modulo 2¹²⁸.
///
/// The result is truncated to 128 bits; see [`Uint128::widening_mul`] for
/// the full product.
impl Mul<Uint128> for Uint128 {
    type Output = Uint128;

    fn mul(self, rhs: Uint128) -> Self::Output {
        arith::wrapping_mul(self, rhs)
    }
}

/// Integer division (`/`) producing the quotient.
impl Div<Uint128> for Uint128 {
    type Output = Uint128;

    fn div(self, rhs: Uint128) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");

        arith::div_rem(self, rhs).0
    }
}

/// Remainder (`%`) of integer division.
impl Rem<Uint128> for Uint128 {
    type Output = Uint128;

    fn rem(self, rhs: Uint128) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");

        arith::div_rem(self, rhs).1
    }
}

macro_rules! impl_assign_op {
    ($($assign_trait:ident::$assign_fn:ident => $op_trait:ident::$op_fn:ident<$rhs:ty>),* $(,)?) => {
        $(
            impl $assign_trait<$rhs> for Uint128 {
                fn $assign_fn(&mut self, rhs: $rhs) {
                    *self = $op_trait::$op_fn(*self, rhs);
                }
            }
        )*
    };
}

impl_assign_op! {
    AddAssign::add_assign => Add::add<Uint128>,
    SubAssign::sub_assign => Sub::sub<Uint128>,
    MulAssign::mul_assign => Mul::mul<Uint128>,
    DivAssign::div_assign => Div::div<Uint128>,
    RemAssign::rem_assign => Rem::rem<Uint128>,
    BitAndAssign::bitand_assign => BitAnd::bitand<Uint128>,
    BitOrAssign::bitor_assign => BitOr::bitor<Uint128>,
    BitXorAssign::bitxor_assign => BitXor::bitxor<Uint128>,
    ShlAssign::shl_assign => Shl::shl<Uint128>,
    ShrAssign::shr_assign => Shr::shr<Uint128>,
    ShlAssign::shl_assign => Shl::shl<u32>,
    ShrAssign::shr_assign => Shr::shr<u32>,
}
