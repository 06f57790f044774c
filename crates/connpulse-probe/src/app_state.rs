//! Shared application state for the probe responder.

use std::sync::Arc;

use connpulse_core::clock::RequestClock;

use crate::net::OpenConnections;

/// Cloneable handle over the responder's process-wide state: the
/// first-request latch and the connection-count seam.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    clock: RequestClock,
    connections: Arc<dyn OpenConnections>,
}

impl AppState {
    pub fn new(connections: Arc<dyn OpenConnections>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                clock: RequestClock::new(),
                connections,
            }),
        }
    }

    pub fn clock(&self) -> &RequestClock {
        &self.inner.clock
    }

    pub fn connections(&self) -> Arc<dyn OpenConnections> {
        Arc::clone(&self.inner.connections)
    }
}
