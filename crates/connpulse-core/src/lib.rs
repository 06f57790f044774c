//! connpulse core: runtime-free primitives shared by the probe responder and
//! the load driver.
//!
//! This crate defines the error surface, the first-request latch, and the
//! load-run arithmetic. It intentionally carries no transport or runtime
//! dependencies so it can be reused by both binaries and their tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PulseError`/`Result` so production
//! processes do not crash on bad input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod error;
pub mod stats;

/// Shared result type.
pub use error::{PulseError, Result};
