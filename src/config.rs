//! Sampler configuration.
//!
//! This module defines the tunable parameters of [`SecureRandom`] and
//! validates them before a sampler is built.
//!
//! [`SecureRandom`]: crate::rng::SecureRandom

use crate::error::{RandomError, Result};

/// Number of random bytes used by the `*_default` token functions.
///
/// 32 bytes yields 256 bits of entropy.
pub const DEFAULT_ENTROPY: usize = 32;

/// Configuration parameters for a [`SecureRandom`](crate::rng::SecureRandom).
///
/// # Recommended Values
///
/// The defaults suit almost every caller:
/// - `max_rejections`: `None`. The rejection loop needs fewer than two
///   draws on average, so a ceiling only matters when the byte source
///   itself is suspect.
/// - `default_entropy`: [`DEFAULT_ENTROPY`] (32 bytes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomConfig {
    /// Maximum number of draws the range sampler performs before failing
    /// with [`RandomError::RejectionLimit`]. `None` means unbounded.
    pub max_rejections: Option<u32>,
    /// Byte count used by the `*_default` token helpers (minimum 1).
    pub default_entropy: usize,
}

impl RandomConfig {
    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] if:
    /// - `max_rejections` is `Some(0)`, which would forbid even one draw
    /// - `default_entropy` is zero
    pub fn validate(&self) -> Result<()> {
        if self.max_rejections == Some(0) {
            return Err(RandomError::invalid(
                "\"max_rejections\" must allow at least one draw",
            ));
        }

        if self.default_entropy == 0 {
            return Err(RandomError::invalid(
                "\"default_entropy\" must be at least one byte",
            ));
        }

        Ok(())
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            max_rejections: None,
            default_entropy: DEFAULT_ENTROPY,
        }
    }
}
