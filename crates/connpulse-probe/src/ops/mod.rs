//! Operational HTTP endpoints.
//!
//! - `/` : probe endpoint; answers an empty 200 and emits one diagnostic
//!   line carrying (elapsed ms since first probe, open connection count)

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use connpulse_core::clock::epoch_ms;

use crate::app_state::AppState;

/// `GET /`.
///
/// The count query and the diagnostic line run on a spawned task; the empty
/// 200 goes out without waiting for either, so no ordering holds between
/// the response and the log line.
pub async fn probe(State(app): State<AppState>) -> impl IntoResponse {
    tokio::spawn(async move {
        match app.connections().current().await {
            Ok(open) => {
                let elapsed_ms = app.clock().observe(epoch_ms());
                tracing::info!(elapsed_ms, open_connections = open, "probe");
            }
            // Count unavailable: drop this sample and keep serving. The
            // request already got its 200; nothing is logged for it.
            Err(_) => {}
        }
    });

    StatusCode::OK
}
