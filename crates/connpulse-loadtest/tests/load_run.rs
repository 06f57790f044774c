#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use clap::Parser;

use connpulse_loadtest::{options::LoadOptions, runner::LoadRunner};
use connpulse_probe::{app_state::AppState, net, router};

#[tokio::test]
async fn short_run_against_local_probe() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let ledger = Arc::new(net::ConnectionLedger::new());
    let state = AppState::new(Arc::new(ledger.handle()));
    tokio::spawn(net::serve(listener, router::build_router(state), ledger));

    let url = format!("http://{addr}/");
    let options = LoadOptions::try_parse_from([
        "connpulse-loadtest",
        "--url",
        &url,
        "--connections",
        "2",
        "--rps",
        "20",
        "--duration",
        "1",
    ])
    .unwrap();
    options.validate().unwrap();

    let summary = LoadRunner::new(options).run().await.unwrap();

    // 2 workers at 20 rps aggregate over 1s leaves plenty of margin for at
    // least one completed request even on a slow machine.
    assert!(summary.request_count >= 1);
    assert_eq!(summary.error_count, 0);
}
