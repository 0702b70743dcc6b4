//! Structured-value adapter for `Uint128`.
//!
//! This is the narrow bridge between the numeric core and a generic
//! structured value type, here `serde_json::Value`. The core itself only
//! derives `Serialize`/`Deserialize` as a `{ hi, lo }` record; the functions
//! below pick a representation for human-readable documents.

use crate::error::ConversionError;
use crate::primitives::Uint128;

use serde::Deserialize;
use serde_json::{Value, json};

/// Converts a value into its decimal-string variant.
pub fn to_variant(value: &Uint128) -> Value {
    Value::String(value.to_string())
}

/// Converts a value into its limb-record variant, `{"hi": .., "lo": ..}`.
pub fn to_limb_variant(value: &Uint128) -> Value {
    json!({ "hi": value.hi, "lo": value.lo })
}

/// Reads a `Uint128` back from a structured value.
///
/// Accepted shapes:
/// - a decimal string, parsed with [`Uint128::from_dec_str`]
/// - a non-negative integer that fits in 64 bits
/// - a `{ "hi": u64, "lo": u64 }` record
pub fn from_variant(variant: &Value) -> Result<Uint128, ConversionError> {
    match variant {
        Value::String(s) => Uint128::from_dec_str(s),
        Value::Number(n) => n.as_u64().map(Uint128::from).ok_or_else(|| {
            ConversionError::InvalidVariant(format!("{n} is not a non-negative 64-bit integer"))
        }),
        Value::Object(_) => Uint128::deserialize(variant)
            .map_err(|err| ConversionError::InvalidVariant(err.to_string())),
        other => Err(ConversionError::InvalidVariant(format!(
            "expected string, number or object, found {other}"
        ))),
    }
}
