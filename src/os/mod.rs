//! Operating system entropy layer
//!
//! This module is the only place the crate talks to the host's
//! cryptographically secure random number generator. Every platform
//! submodule exposes the same function:
//!
//! ```ignore
//! pub(crate) fn sys_random(buf: &mut [u8]) -> std::io::Result<()>;
//! ```
//!
//! The implementation is selected at compile time:
//! - Linux: the `getrandom(2)` system call
//! - macOS: `arc4random_buf(3)`
//! - Windows: `BCryptGenRandom` with the system preferred RNG
//! - anything else: the `getrandom` crate
//!
//! Calls may block briefly while the kernel pool is being seeded at boot.
//! No cancellation is offered.

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod other;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub(crate) use other::*;
