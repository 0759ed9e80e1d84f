//! Range sampling
//!
//! Produces integers uniformly distributed over a half-open interval
//! `[min, max)` by rejection sampling.
//!
//! For a range of `width` values the sampler draws `k` bits, where `k`
//! is the bit length of `width - 1`. That gives a value in `[0, 2^k)`
//! with `2^k < 2 * width`; draws at or above `width` are discarded and
//! the draw is repeated. Every accepted value is equally likely, and the
//! expected number of draws stays below two.
//!
//! Reducing a wider draw with `%` would favour the low end of the range
//! whenever `width` does not divide the source span. The rejection loop
//! never does.

use tracing::{trace, warn};

use crate::error::{RandomError, Result};
use crate::rng::bits::{BITS_MAX, bit_length, extract};
use crate::rng::source::ByteSource;

/// Largest supported range width (`2^48`).
pub const RANGE_MAX: u64 = 1 << BITS_MAX;

/// Draws an integer uniformly distributed over `[min, max)`.
///
/// # Errors
///
/// - [`RandomError::RangeViolation`] if `max <= min` or if
///   `max - min` exceeds [`RANGE_MAX`].
/// - [`RandomError::RejectionLimit`] if `max_rejections` draws were all
///   out of range.
/// - Any error of the byte source.
pub(crate) fn sample<S: ByteSource + ?Sized>(
    source: &mut S,
    min: i64,
    max: i64,
    max_rejections: Option<u32>,
) -> Result<i64> {
    if max <= min {
        return Err(RandomError::range("\"max\" must be greater than \"min\""));
    }

    let width = i128::from(max) - i128::from(min);
    if width > i128::from(RANGE_MAX) {
        return Err(RandomError::range(format!(
            "\"max - min\" must be less than or equal to {RANGE_MAX}"
        )));
    }

    let width = width as u64;
    if width == 1 {
        return Ok(min);
    }

    let k = bit_length(width - 1);
    let mut attempts = 0u32;

    loop {
        if max_rejections.is_some_and(|limit| attempts >= limit) {
            warn!(width, k, attempts, "rejection ceiling reached");
            return Err(RandomError::RejectionLimit { attempts });
        }

        let x = extract(source, k)?;
        attempts = attempts.saturating_add(1);

        if x < width {
            return Ok(min + x as i64);
        }

        trace!(width, k, draw = x, "rejected out-of-range draw");
    }
}
