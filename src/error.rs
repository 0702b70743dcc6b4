//! Error types for `Uint128` operations.
//!
//! Every failure is a precondition violation reported synchronously to the
//! caller. Arithmetic overflow is never an error: add, sub, mul and shifts
//! wrap modulo 2¹²⁸.

/// Failure to build a `Uint128` from a string, a big integer or a
/// structured value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The decimal string was empty.
    #[error("cannot parse uint128 from an empty string")]
    Empty,
    /// A character other than an ASCII digit was found.
    #[error("invalid character {found:?} at position {index} in decimal string")]
    InvalidDigit { index: usize, found: char },
    /// The value needs more than 128 bits.
    #[error("value does not fit in 128 bits")]
    Overflow,
    /// The structured value has a shape that cannot describe a `Uint128`.
    #[error("invalid uint128 variant: {0}")]
    InvalidVariant(String),
}

/// A narrowing accessor was called on a value that does not fit the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("uint128 value does not fit in {target}")]
pub struct RangeError {
    /// Name of the narrower integer type, e.g. `"u32"`.
    pub target: &'static str,
}

/// Division or remainder with a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("division by zero")]
pub struct DivideByZeroError;

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error(transparent)]
    DivideByZero(#[from] DivideByZeroError),
}
