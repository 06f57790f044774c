//! Load run execution.
//!
//! One worker per requested connection. Worker `i` starts after an
//! `i / rps` stagger so the aggregate request spacing approximates `1/rps`,
//! then issues one GET per `connections / rps` tick over its own keep-alive
//! client. Completed requests flow to a collector; the run stops at the
//! deadline and in-flight workers are abandoned.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::time;

use connpulse_core::stats::{summarize, LoadSummary, RequestSample};
use connpulse_core::{PulseError, Result};

use crate::options::LoadOptions;

#[derive(Debug, Clone, Copy)]
struct Pacing {
    start_delay: Duration,
    interval: Duration,
}

fn pacing(worker: u32, connections: u32, rps: f64) -> Pacing {
    Pacing {
        start_delay: Duration::from_secs_f64(f64::from(worker) / rps),
        interval: Duration::from_secs_f64(f64::from(connections) / rps),
    }
}

pub struct LoadRunner {
    options: LoadOptions,
}

impl LoadRunner {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Run until the deadline and reduce every collected sample.
    pub async fn run(&self) -> Result<LoadSummary> {
        let (tx, mut rx) = mpsc::channel::<RequestSample>(256);

        tracing::info!(
            rps = self.options.rps,
            connections = self.options.connections,
            "load run starting"
        );

        for worker in 0..self.options.connections {
            let pace = pacing(worker, self.options.connections, self.options.rps);
            let client = build_client()?;
            let url = self.options.url.clone();
            let tx = tx.clone();
            tokio::spawn(worker_loop(worker, client, url, pace, tx));
        }
        drop(tx);

        let deadline = time::Instant::now() + self.options.run_duration();
        let timeout = time::sleep_until(deadline);
        tokio::pin!(timeout);

        let mut samples = Vec::new();
        loop {
            tokio::select! {
                _ = &mut timeout => break,
                maybe = rx.recv() => match maybe {
                    Some(sample) => samples.push(sample),
                    None => break,
                },
            }
        }

        Ok(summarize(&samples))
    }
}

/// One keep-alive connection per worker, mirroring a single idle slot with
/// a generous idle timeout.
fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .pool_max_idle_per_host(1)
        .pool_idle_timeout(Duration::from_secs(100))
        .build()
        .map_err(|e| PulseError::LoadClient(e.to_string()))
}

async fn worker_loop(
    worker: u32,
    client: reqwest::Client,
    url: String,
    pace: Pacing,
    tx: mpsc::Sender<RequestSample>,
) {
    time::sleep(pace.start_delay).await;

    let mut ticks = time::interval(pace.interval);
    loop {
        ticks.tick().await;
        match request_once(&client, &url).await {
            Ok(sample) => {
                tracing::debug!(worker, status = sample.status, "request done");
                if tx.send(sample).await.is_err() {
                    return; // collector gone, run is over
                }
            }
            // Request failed: skip this tick, keep the worker alive.
            Err(_) => {}
        }
    }
}

async fn request_once(client: &reqwest::Client, url: &str) -> Result<RequestSample> {
    let started = Instant::now();
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| PulseError::LoadClient(e.to_string()))?;
    let status = resp.status().as_u16();
    // Drain the body so the connection goes back to the pool.
    let _ = resp.bytes().await;
    Ok(RequestSample::new(status, started.elapsed()))
}
