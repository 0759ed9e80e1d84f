//! Sampling facade
//!
//! [`SecureRandom`] pairs a [`ByteSource`] with a [`RandomConfig`] and
//! exposes every sampling operation of the crate as a method. The
//! crate-level free functions are thin wrappers around a
//! `SecureRandom<OsRng>` with the default configuration.

use crate::config::RandomConfig;
use crate::error::Result;
use crate::rng::bits::extract;
use crate::rng::range::sample;
use crate::rng::seq::{choose, shuffle_in_place};
use crate::rng::source::{ByteSource, OsRng, fresh_bytes};
use crate::token::{hex_from, urlsafe_from};

/// Unbiased sampler over a cryptographically secure byte source.
///
/// The sampler keeps no randomness of its own: every method pulls fresh
/// bytes from the underlying source, and no buffer is reused between
/// calls.
#[derive(Debug)]
pub struct SecureRandom<S: ByteSource = OsRng> {
    source: S,
    config: RandomConfig,
}

impl SecureRandom<OsRng> {
    /// Creates a sampler backed by the operating system.
    pub fn new() -> Self {
        Self::from_source(OsRng)
    }
}

impl Default for SecureRandom<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ByteSource> SecureRandom<S> {
    /// Creates a sampler over `source` with the default configuration.
    pub fn from_source(source: S) -> Self {
        Self {
            source,
            config: RandomConfig::default(),
        }
    }

    /// Creates a sampler over `source` with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`](crate::RandomError::InvalidArgument)
    /// if `config` fails [`RandomConfig::validate`].
    pub fn with_config(source: S, config: RandomConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { source, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &RandomConfig {
        &self.config
    }

    /// Fills `out` with random bytes.
    pub fn fill_bytes(&mut self, out: &mut [u8]) -> Result<()> {
        self.source.fill_bytes(out)
    }

    /// Returns a freshly allocated buffer of `len` random bytes.
    pub fn bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        fresh_bytes(&mut self.source, len)
    }

    /// Returns an integer with `k` random bits, uniform over `[0, 2^k)`.
    ///
    /// # Errors
    ///
    /// [`RandomError::RangeViolation`](crate::RandomError::RangeViolation)
    /// if `k` exceeds [`BITS_MAX`](crate::BITS_MAX).
    pub fn bits(&mut self, k: u32) -> Result<u64> {
        extract(&mut self.source, k)
    }

    /// Returns an integer `n` with `min <= n < max`, every value equally
    /// likely.
    ///
    /// # Errors
    ///
    /// - [`RandomError::RangeViolation`](crate::RandomError::RangeViolation)
    ///   if `max <= min` or `max - min` exceeds [`RANGE_MAX`](crate::RANGE_MAX)
    /// - [`RandomError::RejectionLimit`](crate::RandomError::RejectionLimit)
    ///   if a rejection ceiling is configured and reached
    pub fn int(&mut self, min: i64, max: i64) -> Result<i64> {
        sample(&mut self.source, min, max, self.config.max_rejections)
    }

    /// Shorthand for [`int(0, bound)`](Self::int).
    pub fn below(&mut self, bound: i64) -> Result<i64> {
        self.int(0, bound)
    }

    /// Returns a uniformly chosen element of `seq`.
    ///
    /// # Errors
    ///
    /// [`RandomError::RangeViolation`](crate::RandomError::RangeViolation)
    /// if `seq` is empty.
    pub fn choice<'a, T>(&mut self, seq: &'a [T]) -> Result<&'a T> {
        choose(&mut self.source, seq, self.config.max_rejections)
    }

    /// Permutes `seq` in place, every permutation equally likely.
    ///
    /// Slices of length 0 or 1 are left untouched and consume no entropy.
    pub fn shuffle<T>(&mut self, seq: &mut [T]) -> Result<()> {
        shuffle_in_place(&mut self.source, seq, self.config.max_rejections)
    }

    /// Returns `num_bytes` random bytes as lowercase hexadecimal.
    pub fn token_hex(&mut self, num_bytes: usize) -> Result<String> {
        hex_from(&mut self.source, num_bytes)
    }

    /// Returns `num_bytes` random bytes as unpadded URL-safe base64.
    pub fn token_urlsafe(&mut self, num_bytes: usize) -> Result<String> {
        urlsafe_from(&mut self.source, num_bytes)
    }

    /// Hexadecimal token using the configured default entropy.
    pub fn token_hex_default(&mut self) -> Result<String> {
        self.token_hex(self.config.default_entropy)
    }

    /// URL-safe token using the configured default entropy.
    pub fn token_urlsafe_default(&mut self) -> Result<String> {
        self.token_urlsafe(self.config.default_entropy)
    }
}
