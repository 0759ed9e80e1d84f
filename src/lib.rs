//! Secure random values and identifiers for Nebula
//!
//! This crate derives unbiased random values and time-ordered unique
//! identifiers from the operating system's cryptographically secure
//! random number generator.
//!
//! The focus is on **correct distributions and auditability**: every
//! value is built from fresh OS entropy through a small number of
//! explicit steps, and no step introduces bias. It is not a seedable or
//! reproducible PRNG and is unsuitable for simulation.
//!
//! # Module overview
//!
//! - `os`
//!   The operating system entropy layer. This is the only code that
//!   touches the host's random number generator (`getrandom(2)` on
//!   Linux, `arc4random_buf` on macOS, `BCryptGenRandom` on Windows).
//!
//! - `rng`
//!   Bit extraction, rejection sampling over arbitrary integer ranges of
//!   up to `2^48` values, and slice helpers (`choice`, `shuffle`). The
//!   [`ByteSource`] trait is the seam between sampling and entropy, and
//!   [`SecureRandom`] bundles a source with its [`RandomConfig`].
//!
//! - `token`
//!   Random text tokens in hexadecimal or URL-safe base64.
//!
//! - `uuid`
//!   Monotonic version 7 identifiers: a 48-bit millisecond timestamp,
//!   74 random bits, and the version and variant markers. Successive
//!   identifiers from one clock state always carry strictly increasing
//!   timestamps.
//!
//! # Example
//!
//! ```
//! let roll = nebula_random::random_int(1, 7).unwrap();
//! assert!((1..7).contains(&roll));
//!
//! let token = nebula_random::token_urlsafe(16).unwrap();
//! assert_eq!(token.len(), 22);
//!
//! let id = nebula_random::uuid7().unwrap();
//! assert_eq!(id.version(), 7);
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [`RandomError`]. Malformed input is
//! reported as [`RandomError::InvalidArgument`]; input outside the
//! supported magnitude as [`RandomError::RangeViolation`]. Nothing is
//! retried or silently corrected.
//!
//! # Logging
//!
//! Diagnostics are emitted through [`tracing`]; the crate never installs
//! a subscriber.

mod config;
mod error;
mod os;

pub mod rng;
pub mod token;
pub mod uuid;

pub use config::{DEFAULT_ENTROPY, RandomConfig};
pub use error::{RandomError, Result};
pub use rng::{
    BITS_MAX, ByteSource, OsRng, RANGE_MAX, SecureRandom, bit_length, choice, random_below,
    random_bits, random_bytes, random_int, shuffle,
};
pub use token::{token_hex, token_hex_default, token_urlsafe, token_urlsafe_default};
pub use uuid::{Uuid, uuid7};
