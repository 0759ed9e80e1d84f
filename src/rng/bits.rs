//! Bit extraction
//!
//! Turns `ceil(k / 8)` random bytes into an integer holding exactly `k`
//! random bits. The bytes are folded big-endian, so the surplus bits of
//! the last byte sit at the low end and are shifted out.

use crate::error::{RandomError, Result};
use crate::rng::source::ByteSource;

/// Largest bit count [`extract`] accepts.
///
/// Ranges are limited to `2^BITS_MAX` values as a consequence.
pub const BITS_MAX: u32 = 48;

const BYTES_MAX: usize = (BITS_MAX as usize).div_ceil(8);

/// Returns the number of binary digits needed to write `n`.
///
/// `bit_length(0)` is `0`.
pub fn bit_length(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

/// Draws an integer uniformly distributed over `[0, 2^k)`.
///
/// `k == 0` consumes no entropy and always returns `0`.
pub(crate) fn extract<S: ByteSource + ?Sized>(source: &mut S, k: u32) -> Result<u64> {
    if k > BITS_MAX {
        return Err(RandomError::range(format!(
            "number of bits must be less than or equal to {BITS_MAX}"
        )));
    }

    let num_bytes = k.div_ceil(8) as usize;
    let mut buf = [0u8; BYTES_MAX];
    let bytes = &mut buf[..num_bytes];
    source.fill_bytes(bytes)?;

    let x = bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));

    // trim excess bits
    Ok(x >> (num_bytes as u32 * 8 - k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_length_small_values() {
        assert_eq!(bit_length(0), 0);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(2), 2);
        assert_eq!(bit_length(3), 2);
        assert_eq!(bit_length(4), 3);
        assert_eq!(bit_length(255), 8);
        assert_eq!(bit_length(256), 9);
    }

    #[test]
    fn bit_length_range_limit() {
        assert_eq!(bit_length((1 << BITS_MAX) - 1), BITS_MAX);
        assert_eq!(bit_length(u64::MAX), 64);
    }
}
