//! connpulse probe responder library.
//!
//! This crate wires the env config, shared state, router, and the
//! connection-counting accept loop into a diagnostic HTTP endpoint. It is
//! intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod net;
pub mod ops;
pub mod router;
