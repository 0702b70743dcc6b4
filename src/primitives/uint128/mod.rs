//! 128-bit unsigned integer primitive
//!
//! This module defines the `Uint128` type, a fixed-size 128-bit unsigned
//! integer stored as two 64-bit limbs.
//!
//! All arithmetic is written in terms of the two limbs and explicit
//! carry/borrow handling, so no operation depends on a native 128-bit type.
//! The `speed` feature lets the multiply and divide paths use native `u128`
//! internally; results are identical either way.
//!
//! Typical use cases include:
//! - large counters and supply values
//! - hash and index keys
//! - wire-compatible fixed-size serialization

mod arith;
mod cmp;
mod conv;
mod core;
mod ops;

pub mod raw;

/// Fixed-size 128-bit unsigned integer.
pub use self::core::Uint128;
