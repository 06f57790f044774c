//! Axum router wiring.
//!
//! A single `GET /` probe route; everything else falls through to axum's
//! default 404/405 handling.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new().route("/", get(ops::probe)).with_state(state)
}
