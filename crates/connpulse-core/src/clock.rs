//! First-request latch.
//!
//! The probe responder reports, on every successful probe, the elapsed time
//! since the very first probe it ever served. The latch below moves from
//! unset to a fixed timestamp at most once and never changes afterwards; a
//! compare-and-swap keeps that true under concurrent request handling.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Sentinel for "no probe observed yet". `u64::MAX` rather than 0 so an
/// epoch reading of 0 stays representable.
const UNSET: u64 = u64::MAX;

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// A clock set before the epoch reads as 0; the saturating arithmetic in
/// [`RequestClock::observe`] keeps that harmless.
pub fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Set-once cell recording when the first probe arrived.
#[derive(Debug)]
pub struct RequestClock {
    first_hit_ms: AtomicU64,
}

impl RequestClock {
    pub fn new() -> Self {
        Self {
            first_hit_ms: AtomicU64::new(UNSET),
        }
    }

    /// Record a probe observed at `now_ms` and return the elapsed
    /// milliseconds since the first observed probe (0 on the first).
    ///
    /// The first caller wins the CAS; every concurrent loser reads the
    /// winner's timestamp. Elapsed uses saturating subtraction so a
    /// backwards wall-clock step cannot underflow.
    pub fn observe(&self, now_ms: u64) -> u64 {
        match self.first_hit_ms.compare_exchange(
            UNSET,
            now_ms,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => 0,
            Err(first) => now_ms.saturating_sub(first),
        }
    }

    /// Timestamp of the first observed probe, if any.
    pub fn first_hit_ms(&self) -> Option<u64> {
        match self.first_hit_ms.load(Ordering::Acquire) {
            UNSET => None,
            first => Some(first),
        }
    }
}

impl Default for RequestClock {
    fn default() -> Self {
        Self::new()
    }
}
