//! Load-run samples and their reduction into a summary.

use std::time::Duration;

use serde::Serialize;

/// Outcome of one completed load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestSample {
    pub status: u16,
    pub latency: Duration,
}

impl RequestSample {
    pub fn new(status: u16, latency: Duration) -> Self {
        Self { status, latency }
    }

    /// Anything but a plain 200 counts as an error in the summary.
    pub fn is_error(&self) -> bool {
        self.status != 200
    }
}

/// Aggregate of a finished load run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub request_count: usize,
    pub error_count: usize,
    pub mean_response_micros: u64,
}

impl LoadSummary {
    pub fn mean_response_time(&self) -> Duration {
        Duration::from_micros(self.mean_response_micros)
    }
}

/// Reduce collected samples. The mean is computed over microseconds; an
/// empty run yields an all-zero summary rather than dividing by zero.
pub fn summarize(samples: &[RequestSample]) -> LoadSummary {
    if samples.is_empty() {
        return LoadSummary {
            request_count: 0,
            error_count: 0,
            mean_response_micros: 0,
        };
    }

    let error_count = samples.iter().filter(|s| s.is_error()).count();
    let total_micros: u128 = samples.iter().map(|s| s.latency.as_micros()).sum();

    LoadSummary {
        request_count: samples.len(),
        error_count,
        mean_response_micros: (total_micros / samples.len() as u128) as u64,
    }
}
