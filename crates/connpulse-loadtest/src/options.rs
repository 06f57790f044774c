//! CLI options for the load driver.

use std::time::Duration;

use clap::Parser;

use connpulse_core::{PulseError, Result};

/// Drive steady GET load at a probe endpoint and report the outcome.
#[derive(Debug, Parser)]
#[command(name = "connpulse-loadtest", version)]
pub struct LoadOptions {
    /// Target URL, e.g. http://127.0.0.1:8080/
    #[arg(long)]
    pub url: String,

    /// Number of persistent connections (one worker each).
    #[arg(long)]
    pub connections: u32,

    /// Aggregate requests per second across all connections.
    #[arg(long)]
    pub rps: f64,

    /// Run duration in seconds.
    #[arg(long)]
    pub duration: u64,

    /// Also print the summary as one JSON object on stdout.
    #[arg(long)]
    pub json: bool,
}

impl LoadOptions {
    /// Reject the zero values clap's type layer cannot.
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(PulseError::Config("--url must not be empty".into()));
        }
        if self.connections == 0 {
            return Err(PulseError::Config("--connections must be at least 1".into()));
        }
        if self.rps.is_nan() || self.rps <= 0.0 {
            return Err(PulseError::Config("--rps must be positive".into()));
        }
        if self.duration == 0 {
            return Err(PulseError::Config("--duration must be at least 1 second".into()));
        }
        Ok(())
    }

    pub fn run_duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }
}
