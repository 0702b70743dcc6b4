//! Decimal string parsing for `Uint128`.
//!
//! Formatting lives with the type's `Display` impl.

use crate::error::ConversionError;
use crate::primitives::Uint128;

use num_bigint::BigUint;
use std::str::FromStr;

impl Uint128 {
    /// Parses a non-negative base-10 numeral.
    ///
    /// Only ASCII digits are accepted: no sign, whitespace or separators.
    /// Leading zeros are allowed.
    ///
    /// # Errors
    /// - [`ConversionError::Empty`] for an empty string
    /// - [`ConversionError::InvalidDigit`] for any non-digit character
    /// - [`ConversionError::Overflow`] if the value is 2¹²⁸ or larger
    pub fn from_dec_str(value: &str) -> Result<Self, ConversionError> {
        if let Some((index, found)) = value.char_indices().find(|&(_, c)| !c.is_ascii_digit()) {
            return Err(ConversionError::InvalidDigit { index, found });
        }

        // Digits only at this point, so `None` means the input was empty.
        let parsed = BigUint::parse_bytes(value.as_bytes(), 10).ok_or(ConversionError::Empty)?;

        Uint128::try_from(&parsed)
    }
}

impl FromStr for Uint128 {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uint128::from_dec_str(s)
    }
}
