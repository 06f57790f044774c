//! connpulse load driver.
//!
//! Companion CLI to the probe responder: holds N keep-alive connections
//! open against a URL, paces GET requests at a target aggregate RPS for a
//! fixed duration, and reports request count, error count, and mean
//! response time.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use connpulse_loadtest::{options::LoadOptions, runner::LoadRunner};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let options = LoadOptions::parse();
    if let Err(err) = options.validate() {
        eprintln!("{err}");
        std::process::exit(1);
    }
    let json = options.json;

    let summary = LoadRunner::new(options).run().await.expect("load run failed");

    tracing::info!(
        request_count = summary.request_count,
        error_count = summary.error_count,
        mean_response_micros = summary.mean_response_micros,
        "load run finished"
    );

    if json {
        match serde_json::to_string(&summary) {
            Ok(line) => println!("{line}"),
            Err(err) => tracing::error!(%err, "summary serialization failed"),
        }
    }
}
