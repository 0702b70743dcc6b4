//! Integer conversion utilities
//!
//! This module groups the conversions between `Uint128` and other integer
//! representations, split by source/target type:
//! - zero extension for unsigned inputs, sign extension for signed inputs
//! - fallible conversions when narrowing may lose information
//! - decimal strings and big integers go through `num_bigint::BigUint`

mod bigint;
mod string;
mod u128;
mod u32;
mod u64;
