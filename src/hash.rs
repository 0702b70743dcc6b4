//! Stable hashing of `Uint128` values.
//!
//! The hash input is the 16-byte raw encoding (`hi` then `lo`, little-endian
//! limbs), so the result does not depend on the host's byte order. The
//! hasher is `rustc_hash::FxHasher`, which has a fixed seed: the same value
//! hashes to the same output in every process.

use crate::primitives::Uint128;

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Returns the deterministic hash of `value`.
pub fn hash_value(value: &Uint128) -> usize {
    hash_bytes(&value.to_raw_bytes())
}

/// Hashes an arbitrary byte buffer with the crate's hash function.
pub fn hash_bytes(bytes: &[u8]) -> usize {
    let mut hasher = FxHasher::default();
    hasher.write(bytes);

    hasher.finish() as usize
}

/// Feeds the raw 16-byte encoding into `state`, consistent with `Eq`.
impl Hash for Uint128 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.to_raw_bytes());
    }
}
