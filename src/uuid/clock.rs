//! Time sources and the monotonic clock state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::error::{RandomError, Result};

/// Largest timestamp that fits the 48-bit identifier field.
pub const TIMESTAMP_MAX: u64 = (1 << 48) - 1;

/// A source of Unix time in milliseconds.
pub trait Clock {
    /// Milliseconds elapsed since the Unix epoch.
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// The host wall clock.
///
/// Instants before the Unix epoch read as `0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis().min(u128::from(u64::MAX)) as u64)
            .unwrap_or(0)
    }
}

/// Timestamp of the most recently issued identifier.
///
/// The state starts at `0` and only moves forward. Every generator that
/// shares one `ClockState` issues strictly increasing timestamps, across
/// threads as well: the read, compare and write happen as one atomic
/// update.
///
/// ```
/// use nebula_random::uuid::ClockState;
///
/// static CLOCK: ClockState = ClockState::new();
/// assert_eq!(CLOCK.last_ms(), 0);
/// ```
#[derive(Debug, Default)]
pub struct ClockState {
    last_unix_ms: AtomicU64,
}

impl ClockState {
    /// A fresh state that has issued nothing yet.
    pub const fn new() -> Self {
        Self {
            last_unix_ms: AtomicU64::new(0),
        }
    }

    /// The last timestamp handed out, or `0`.
    pub fn last_ms(&self) -> u64 {
        self.last_unix_ms.load(Ordering::Acquire)
    }

    /// Records and returns the timestamp for the next identifier.
    ///
    /// The result is `now` when the clock has moved past the last issued
    /// value, and `last + 1` otherwise (equal reading or a clock that went
    /// backwards).
    ///
    /// # Errors
    ///
    /// [`RandomError::RangeViolation`] if the timestamp would no longer
    /// fit in 48 bits. The state is left unchanged in that case.
    pub fn advance(&self, now: u64) -> Result<u64> {
        let previous = self
            .last_unix_ms
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                let next = next_timestamp(last, now);
                (next <= TIMESTAMP_MAX).then_some(next)
            })
            .map_err(|last| {
                RandomError::range(format!(
                    "timestamp {} exceeds the 48-bit identifier field",
                    next_timestamp(last, now)
                ))
            })?;

        if previous >= now {
            debug!(now, last = previous, "clock has not passed last timestamp, bumping");
        }

        Ok(next_timestamp(previous, now))
    }
}

fn next_timestamp(last: u64, now: u64) -> u64 {
    if last >= now { last.saturating_add(1) } else { now }
}
