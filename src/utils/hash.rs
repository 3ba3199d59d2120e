//! Content hashing using FxHash.
//!
//! Uses `rustc_hash::FxHasher` for fast, deterministic hashing of profile
//! file content; the global handle compares hashes to skip no-op reloads.

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}
