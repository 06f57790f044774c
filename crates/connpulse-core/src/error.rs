//! Shared error type across connpulse crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, PulseError>;

/// Unified error type used by the probe responder and the load driver.
#[derive(Debug, Error)]
pub enum PulseError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("connection count unavailable")]
    CountUnavailable,
    #[error("load client: {0}")]
    LoadClient(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PulseError {
    /// True for the one error the probe handler is allowed to swallow.
    pub fn is_count_unavailable(&self) -> bool {
        matches!(self, PulseError::CountUnavailable)
    }
}
