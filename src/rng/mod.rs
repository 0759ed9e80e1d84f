//! Random number generation module
//!
//! This module turns operating system entropy into unbiased values:
//!
//! - [`random_bytes`]: raw bytes straight from the byte source
//! - [`random_bits`]: an integer with exactly `k` random bits (`k <= 48`)
//! - [`random_int`] / [`random_below`]: a uniform integer over a
//!   half-open range of at most `2^48` values
//! - [`choice`] / [`shuffle`]: uniform selection and permutation of
//!   slices
//!
//! Each function draws from [`OsRng`]. Callers that need a different byte
//! source or a rejection ceiling use [`SecureRandom`] directly.

mod bits;
mod range;
mod secure;
mod seq;
mod source;

pub use bits::{BITS_MAX, bit_length};
pub use range::RANGE_MAX;
pub use secure::SecureRandom;
pub use source::{ByteSource, OsRng};

pub(crate) use source::fresh_bytes;

use crate::error::Result;

/// Returns `len` cryptographically secure random bytes.
///
/// `random_bytes(0)` returns an empty vector.
pub fn random_bytes(len: usize) -> Result<Vec<u8>> {
    SecureRandom::new().bytes(len)
}

/// Returns an integer uniformly distributed over `[0, 2^k)`.
pub fn random_bits(k: u32) -> Result<u64> {
    SecureRandom::new().bits(k)
}

/// Returns a random integer `n` such that `min <= n < max`.
pub fn random_int(min: i64, max: i64) -> Result<i64> {
    SecureRandom::new().int(min, max)
}

/// Returns a random integer `n` such that `0 <= n < bound`.
pub fn random_below(bound: i64) -> Result<i64> {
    SecureRandom::new().below(bound)
}

/// Returns a randomly chosen element of a non-empty slice.
pub fn choice<T>(seq: &[T]) -> Result<&T> {
    SecureRandom::new().choice(seq)
}

/// Shuffles `seq` in place.
pub fn shuffle<T>(seq: &mut [T]) -> Result<()> {
    SecureRandom::new().shuffle(seq)
}
