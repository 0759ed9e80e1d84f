//! Error types shared by every component of the crate.
//!
//! Failures fall into two caller-facing kinds: malformed input
//! ([`RandomError::InvalidArgument`]) and well-formed input outside the
//! supported magnitude ([`RandomError::RangeViolation`]). The remaining
//! variants report conditions the caller did not cause: the operating
//! system refusing to hand out entropy, or the rejection ceiling from
//! [`RandomConfig`](crate::RandomConfig) being reached.
//!
//! No error is ever recovered from internally. A failed call has no side
//! effects beyond the entropy it already consumed.

use std::io;

use thiserror::Error;

/// Errors returned by sampling, token and identifier operations.
#[derive(Debug, Error)]
pub enum RandomError {
    /// The input has the wrong shape (zero where forbidden, unparsable
    /// identifier text, inconsistent configuration).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input is well formed but outside the supported magnitude.
    #[error("range violation: {0}")]
    RangeViolation(String),

    /// The operating system entropy source failed.
    #[error("entropy source unavailable")]
    EntropyUnavailable(#[source] io::Error),

    /// The rejection loop exceeded the configured ceiling.
    ///
    /// With a working entropy source this is astronomically unlikely and
    /// indicates a broken byte source rather than bad luck.
    #[error("rejection sampling gave up after {attempts} draws")]
    RejectionLimit {
        /// Number of draws performed before giving up.
        attempts: u32,
    },
}

impl RandomError {
    /// Returns `true` for [`RandomError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` for [`RandomError::RangeViolation`].
    pub fn is_range_violation(&self) -> bool {
        matches!(self, Self::RangeViolation(_))
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn range(msg: impl Into<String>) -> Self {
        Self::RangeViolation(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RandomError>;
