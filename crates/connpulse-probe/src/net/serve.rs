//! Accept loop.
//!
//! The responder owns its accept loop instead of handing the listener to
//! `axum::serve`: counting open sockets requires seeing every accept and
//! every connection teardown. Each accepted stream is entered into the
//! ledger and served by hyper http1 with the axum router as its service.

use std::sync::Arc;

use axum::Router;
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use hyper_util::service::TowerToHyperService;
use tokio::net::TcpListener;

use super::ledger::ConnectionLedger;

/// Serve `router` on `listener` forever. A connection is counted from
/// accept until its serving task finishes or the peer hangs up. Accept
/// errors do not stop the loop.
pub async fn serve(listener: TcpListener, router: Router, ledger: Arc<ConnectionLedger>) {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(err) => {
                tracing::warn!(%err, "accept failed");
                continue;
            }
        };

        let guard = ledger.register(peer);
        let service = TowerToHyperService::new(router.clone());

        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::debug!(%peer, %err, "connection ended with error");
            }
            drop(guard);
        });
    }
}
