//! Monotonic unique identifiers
//!
//! This module generates 128-bit, time-ordered identifiers in the
//! version 7 layout: a 48-bit millisecond timestamp followed by 74
//! random bits and the fixed version and variant markers.
//!
//! The only shared mutable state in the crate lives here. A
//! [`ClockState`] remembers the last issued timestamp so that successive
//! identifiers always carry a larger one, even when the wall clock
//! stalls or steps backwards. [`uuid7`] uses a process-wide state; an
//! explicitly owned state can be passed to [`Uuid7Generator`] instead.
//!
//! Uniqueness across processes relies on the random bits, not on any
//! coordination.

mod clock;
mod id;
mod v7;

pub use clock::{Clock, ClockState, SystemClock, TIMESTAMP_MAX};
pub use id::Uuid;
pub use v7::{Uuid7Generator, uuid7};
