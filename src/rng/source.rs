//! Byte source adapter
//!
//! [`ByteSource`] is the seam between the sampling code and whatever
//! produces entropy. The crate ships one production implementation,
//! [`OsRng`], which forwards to the operating system. Everything built on
//! top of it (bit extraction, range sampling, tokens, identifiers) is
//! generic over the trait and never touches the OS directly.

use tracing::error;

use crate::error::{RandomError, Result};
use crate::os::sys_random;

/// A provider of uniformly distributed random bytes.
///
/// Implementations must fill the whole buffer or fail; a partially
/// written buffer must never be reported as success.
pub trait ByteSource {
    /// Fills `buf` entirely with random bytes.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(buf)
    }
}

/// The operating system's cryptographically secure random generator.
///
/// `OsRng` holds no state: every call goes straight to the kernel (or
/// the platform equivalent), so there is nothing in process memory to
/// observe or roll back.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRng;

impl ByteSource for OsRng {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        if buf.is_empty() {
            return Ok(());
        }

        sys_random(buf).map_err(|err| {
            error!(%err, len = buf.len(), "operating system entropy call failed");
            RandomError::EntropyUnavailable(err)
        })
    }
}

/// Allocates a fresh buffer of `len` bytes and fills it from `source`.
pub(crate) fn fresh_bytes<S: ByteSource + ?Sized>(source: &mut S, len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    source.fill_bytes(&mut buf)?;

    Ok(buf)
}
