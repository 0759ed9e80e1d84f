//! Time-ordered version 7 identifiers.
//!
//! # Field and bit layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |         rand          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                         rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! - `unix_ts_ms` (48 bits): milliseconds since the Unix epoch, strictly
//!   increasing for every generator sharing a [`ClockState`].
//! - `ver` (4 bits): `0111`.
//! - `var` (2 bits): `10`.
//! - `rand` (74 bits): fresh random bits for every identifier.
//!
//! When the wall clock stalls or moves backwards, `unix_ts_ms` is set to
//! one past the last issued value, so it may briefly run ahead of real
//! time.

use crate::error::Result;
use crate::rng::{ByteSource, OsRng};
use crate::uuid::Uuid;
use crate::uuid::clock::{Clock, ClockState, SystemClock};

static PROCESS_CLOCK: ClockState = ClockState::new();

/// Generates a version 7 identifier using the process-wide clock state.
///
/// Identifiers returned by this function compare strictly greater than
/// every identifier it returned earlier in the same process, by timestamp
/// as well as by byte order.
///
/// ```
/// let a = nebula_random::uuid7().unwrap();
/// let b = nebula_random::uuid7().unwrap();
///
/// assert!(b.timestamp_ms() > a.timestamp_ms());
/// assert_eq!(a.to_string().len(), 36);
/// ```
pub fn uuid7() -> Result<Uuid> {
    Uuid7Generator::new(&PROCESS_CLOCK).generate()
}

/// Version 7 identifier generator.
///
/// The generator borrows its [`ClockState`], so several generators (one
/// per thread, for instance) can share a single monotonic sequence.
#[derive(Debug)]
pub struct Uuid7Generator<'a, C: Clock = SystemClock, S: ByteSource = OsRng> {
    state: &'a ClockState,
    clock: C,
    source: S,
}

impl<'a> Uuid7Generator<'a> {
    /// Creates a generator reading the wall clock and the operating
    /// system entropy source.
    pub fn new(state: &'a ClockState) -> Self {
        Self::with_parts(state, SystemClock, OsRng)
    }
}

impl<'a, C: Clock, S: ByteSource> Uuid7Generator<'a, C, S> {
    /// Creates a generator from explicit parts.
    pub fn with_parts(state: &'a ClockState, clock: C, source: S) -> Self {
        Self {
            state,
            clock,
            source,
        }
    }

    /// Generates the next identifier.
    ///
    /// # Errors
    ///
    /// - [`RandomError::RangeViolation`](crate::RandomError::RangeViolation)
    ///   if the timestamp no longer fits in 48 bits
    /// - any error of the byte source
    ///
    /// On error the shared [`ClockState`] is left unchanged.
    pub fn generate(&mut self) -> Result<Uuid> {
        // draw first so a failing source leaves the clock state untouched
        let mut rand = [0u8; 10];
        self.source.fill_bytes(&mut rand)?;

        let unix_ts_ms = self.state.advance(self.clock.now_ms())?;

        Ok(Uuid::from_v7_parts(unix_ts_ms, rand))
    }
}
