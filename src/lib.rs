//! Fixed-width 128-bit unsigned integer
//!
//! This crate provides `Uint128`, a 128-bit unsigned integer built from two
//! 64-bit limbs, for use as a building block in hashing, large counters and
//! wire-compatible serialization.
//!
//! The focus is on **bit-exact, predictable arithmetic**: every operation
//! is written against the two limbs with explicit carry and borrow
//! handling, so behaviour is identical on every target whether or not it
//! has a native double-width integer.
//!
//! # Module overview
//!
//! - `primitives`  
//!   The `Uint128` type itself: construction, conversions, comparison,
//!   bitwise operations, shifts, wrapping add/sub/mul, the full 256-bit
//!   product, long division, and raw 16-byte pack/unpack.
//!
//! - `error`  
//!   `ConversionError`, `RangeError` and `DivideByZeroError`, the three
//!   precondition failures an operation can report. Overflow is never an
//!   error: arithmetic wraps modulo 2¹²⁸.
//!
//! - `hash`  
//!   A deterministic, process-independent hash over the raw encoding.
//!
//! - `variant` (feature `serde`)  
//!   `to_variant` / `from_variant` adapters to `serde_json::Value`.
//!
//! # Features
//!
//! - `speed`: use native `u128` arithmetic internally for multiply and
//!   divide. Results are identical to the portable limb path.
//! - `serde` (default): serde derives and the `variant` module.
//!
//! # Design goals
//!
//! - No heap allocations in the arithmetic core
//! - No panics on overflow; shifts never exceed a limb's width
//! - Stable binary layout: exactly 16 bytes, `hi` then `lo`

pub mod error;
pub mod hash;
pub mod primitives;
#[cfg(feature = "serde")]
pub mod variant;

pub use error::{ConversionError, DivideByZeroError, Error, RangeError};
pub use primitives::Uint128;
