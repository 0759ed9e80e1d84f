//! Sequence helpers built on the range sampler.

use crate::error::{RandomError, Result};
use crate::rng::range::sample;
use crate::rng::source::ByteSource;

fn len_bound(len: usize) -> Result<i64> {
    i64::try_from(len).map_err(|_| RandomError::range("sequence is too long to sample from"))
}

/// Picks one element of `seq` uniformly at random.
pub(crate) fn choose<'a, T, S: ByteSource + ?Sized>(
    source: &mut S,
    seq: &'a [T],
    max_rejections: Option<u32>,
) -> Result<&'a T> {
    if seq.is_empty() {
        return Err(RandomError::range("cannot choose from an empty sequence"));
    }

    let index = sample(source, 0, len_bound(seq.len())?, max_rejections)?;

    Ok(&seq[index as usize])
}

/// Fisher-Yates shuffle, walking from the last position down to 1.
///
/// On error the slice holds a valid, partially shuffled permutation of
/// its original elements.
pub(crate) fn shuffle_in_place<T, S: ByteSource + ?Sized>(
    source: &mut S,
    seq: &mut [T],
    max_rejections: Option<u32>,
) -> Result<()> {
    for i in (1..seq.len()).rev() {
        let j = sample(source, 0, len_bound(i + 1)?, max_rejections)?;
        seq.swap(i, j as usize);
    }

    Ok(())
}
