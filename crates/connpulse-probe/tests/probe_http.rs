#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use connpulse_core::{PulseError, Result};
use connpulse_probe::app_state::AppState;
use connpulse_probe::net::{self, ConnectionLedger, OpenConnections};
use connpulse_probe::router;

struct FixedCount(usize);

#[async_trait]
impl OpenConnections for FixedCount {
    async fn current(&self) -> Result<usize> {
        Ok(self.0)
    }
}

struct BrokenCount;

#[async_trait]
impl OpenConnections for BrokenCount {
    async fn current(&self) -> Result<usize> {
        Err(PulseError::CountUnavailable)
    }
}

fn test_router(counter: Arc<dyn OpenConnections>) -> axum::Router {
    router::build_router(AppState::new(counter))
}

// --------------------
// Handler-level (no sockets)
// --------------------

#[tokio::test]
async fn probe_returns_empty_200() {
    let app = test_router(Arc::new(FixedCount(1)));

    let resp = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn every_probe_in_a_sequence_returns_200() {
    let app = test_router(Arc::new(FixedCount(3)));

    for _ in 0..20 {
        let resp = app
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = test_router(Arc::new(FixedCount(1)));

    let resp = app
        .oneshot(Request::get("/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn probe_survives_count_failure() {
    let app = test_router(Arc::new(BrokenCount));

    for _ in 0..3 {
        let resp = app
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}

// --------------------
// End-to-end over a real listener
// --------------------

async fn spawn_probe() -> (SocketAddr, Arc<ConnectionLedger>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let ledger = Arc::new(ConnectionLedger::new());
    let state = AppState::new(Arc::new(ledger.handle()));
    let app = router::build_router(state);

    tokio::spawn(net::serve(listener, app, Arc::clone(&ledger)));
    (addr, ledger)
}

#[tokio::test]
async fn end_to_end_probe_is_empty_200() {
    let (addr, ledger) = spawn_probe().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.bytes().await.unwrap().is_empty());

    // The client keeps its connection alive in the pool, so the ledger
    // still carries it.
    assert!(ledger.count() >= 1);
}

#[tokio::test]
async fn end_to_end_unknown_path_is_404() {
    let (addr, _ledger) = spawn_probe().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("http://{addr}/nonexistent"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_bind_on_same_port_fails() {
    let (addr, _ledger) = spawn_probe().await;

    // The port is taken; a second responder cannot bind it.
    assert!(tokio::net::TcpListener::bind(addr).await.is_err());

    // The first responder is unaffected.
    let client = reqwest::Client::new();
    let resp = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}
