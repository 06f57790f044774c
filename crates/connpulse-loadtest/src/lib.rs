//! connpulse load driver library.
//!
//! Opens a fixed set of keep-alive connections against a probe endpoint and
//! paces GET requests across them at a target aggregate rate, then reduces
//! the collected samples into a run summary.

pub mod options;
pub mod runner;
