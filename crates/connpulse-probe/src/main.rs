//! connpulse probe responder.
//!
//! One diagnostic endpoint: `GET /` answers an empty 200 and logs the
//! elapsed time since the first probe together with the number of open
//! connections on the listening socket.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use connpulse_probe::{app_state, config, net, router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cfg = config::from_env().expect("config load failed");
    let listen = cfg.listen_addr();

    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    let ledger = Arc::new(net::ConnectionLedger::new());
    let state = app_state::AppState::new(Arc::new(ledger.handle()));
    let app = router::build_router(state);

    tracing::info!(%listen, "connpulse-probe listening");

    net::serve(listener, app, ledger).await;
}
