//! 128-bit unsigned integer primitive
//!
//! This module defines the `Uint128` value type together with its
//! constants, limb accessors, bit counting and textual formatting.
//!
//! The value is held as two 64-bit limbs, `hi` and `lo`, representing
//! `hi · 2⁶⁴ + lo`. The struct is `#[repr(C)]` with `hi` first, which makes
//! it exactly 16 bytes with no padding, and makes the derived ordering
//! compare `hi` before `lo`.

use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};

use super::arith;

/// Largest power of ten that fits in a single limb.
const TEN_POW_19: u64 = 10_000_000_000_000_000_000;

/// Fixed-size 128-bit unsigned integer.
///
/// All arithmetic wraps modulo 2¹²⁸. Structured serialization describes the
/// value as a record with the fields `hi` and `lo`, in that order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Uint128 {
    /// Most significant limb.
    pub hi: u64,
    /// Least significant limb.
    pub lo: u64,
}

const _: () = assert!(std::mem::size_of::<Uint128>() == 2 * std::mem::size_of::<u64>());

impl Uint128 {
    /// Number of bits in the representation.
    pub const BITS: u32 = 128;

    /// The value zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// The value one.
    pub const ONE: Self = Self::new(0, 1);

    /// The maximum representable value (2¹²⁸ − 1).
    pub const MAX: Self = Self::new(u64::MAX, u64::MAX);

    /// Builds a value from its high and low limbs.
    pub const fn new(hi: u64, lo: u64) -> Self {
        Self { hi, lo }
    }

    /// Returns the maximum representable value (2¹²⁸ − 1).
    pub const fn max_value() -> Self {
        Self::MAX
    }

    /// Returns `true` if both limbs are zero.
    pub const fn is_zero(&self) -> bool {
        self.hi == 0 && self.lo == 0
    }

    /// Returns the least significant 32 bits, discarding the rest.
    pub const fn low_32_bits(&self) -> u32 {
        self.lo as u32
    }

    /// Returns the low limb.
    pub const fn low_bits(&self) -> u64 {
        self.lo
    }

    /// Returns the high limb.
    pub const fn high_bits(&self) -> u64 {
        self.hi
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=128`.
    pub const fn leading_zeros(&self) -> u32 {
        if self.hi == 0 {
            64 + self.lo.leading_zeros()
        } else {
            self.hi.leading_zeros()
        }
    }

    /// Returns the total number of set bits across both limbs.
    pub const fn count_ones(&self) -> u32 {
        self.hi.count_ones() + self.lo.count_ones()
    }

    /// Population count as a byte; the result is at most 128.
    pub const fn popcount(&self) -> u8 {
        self.count_ones() as u8
    }

    /// Adds one in place, wrapping `MAX` to zero.
    pub fn increment(&mut self) {
        *self = self.succ();
    }

    /// Subtracts one in place, wrapping zero to `MAX`.
    pub fn decrement(&mut self) {
        *self = self.pred();
    }

    /// Returns `self + 1`, wrapping `MAX` to zero.
    pub const fn succ(self) -> Self {
        let lo = self.lo.wrapping_add(1);
        let hi = if lo == 0 { self.hi.wrapping_add(1) } else { self.hi };

        Self::new(hi, lo)
    }

    /// Returns `self - 1`, wrapping zero to `MAX`.
    pub const fn pred(self) -> Self {
        let hi = if self.lo == 0 { self.hi.wrapping_sub(1) } else { self.hi };

        Self::new(hi, self.lo.wrapping_sub(1))
    }

    /// Returns the raw 16-byte wire representation.
    ///
    /// The layout is `hi` followed by `lo`, each limb in little-endian byte
    /// order, independent of the host.
    pub fn to_raw_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];

        out[..8].copy_from_slice(&self.hi.to_le_bytes());
        out[8..].copy_from_slice(&self.lo.to_le_bytes());

        out
    }

    /// Rebuilds a value from the layout produced by [`Uint128::to_raw_bytes`].
    pub fn from_raw_bytes(bytes: [u8; 16]) -> Self {
        let mut hi = [0u8; 8];
        let mut lo = [0u8; 8];

        hi.copy_from_slice(&bytes[..8]);
        lo.copy_from_slice(&bytes[8..]);

        Self::new(u64::from_le_bytes(hi), u64::from_le_bytes(lo))
    }

    fn fmt_hex(&self, f: &mut Formatter<'_>, alphabet: &[u8; 16]) -> fmt::Result {
        let mut buf = [0u8; 32];
        let mut pos = buf.len();
        let mut rest = *self;

        loop {
            pos -= 1;
            buf[pos] = alphabet[(rest.lo & 0xF) as usize];
            rest = rest >> 4u32;

            if rest.is_zero() {
                break;
            }
        }

        let digits = std::str::from_utf8(&buf[pos..]).map_err(|_| fmt::Error)?;
        f.pad_integral(true, "0x", digits)
    }
}

impl Display for Uint128 {
    /// Formats the value as a canonical base-10 numeral.
    ///
    /// The output has no sign, no separators and no leading zeros; zero is
    /// printed as `0`. Width, fill and alignment flags are honoured.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // 2¹²⁸ − 1 has 39 decimal digits.
        let mut buf = [0u8; 39];
        let mut pos = buf.len();
        let mut rest = *self;
        let divisor = Uint128::from(TEN_POW_19);

        loop {
            let (quotient, remainder) = arith::div_rem(rest, divisor);
            let mut chunk = remainder.lo;
            rest = quotient;

            if rest.is_zero() {
                loop {
                    pos -= 1;
                    buf[pos] = b'0' + (chunk % 10) as u8;
                    chunk /= 10;

                    if chunk == 0 {
                        break;
                    }
                }

                break;
            }

            // Inner chunks keep their leading zeros.
            for _ in 0..19 {
                pos -= 1;
                buf[pos] = b'0' + (chunk % 10) as u8;
                chunk /= 10;
            }
        }

        let digits = std::str::from_utf8(&buf[pos..]).map_err(|_| fmt::Error)?;
        f.pad_integral(true, "", digits)
    }
}

impl LowerHex for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, b"0123456789abcdef")
    }
}

impl UpperHex for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, b"0123456789ABCDEF")
    }
}

// SAFETY
//
// Uint128 is allowed to be all zeros
unsafe impl bytemuck::Zeroable for Uint128 {}

// SAFETY
//
// Uint128 is #[repr(C)] with two u64 fields and no padding (checked by the
// size assertion above), and every bit pattern is a valid value.
unsafe impl bytemuck::Pod for Uint128 {}
