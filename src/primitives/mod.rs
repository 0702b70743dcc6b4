//! Primitive types
//!
//! This module defines the fixed-size integer primitive exposed by the
//! crate.
//!
//! Primitives are simple, fixed-size building blocks with well-defined
//! semantics. They are intentionally minimal and do not attempt to be a
//! full-featured big-integer library; arbitrary precision is delegated to
//! `num_bigint`.
//!
//! Current primitives include:
//! - `Uint128`: a fixed-size 128-bit unsigned integer on two 64-bit limbs

mod uint128;

/// Fixed-size unsigned integer primitive.
pub use self::uint128::Uint128;
pub use self::uint128::raw;
