//! Ledger of currently open connections on the listening socket.
//!
//! The accept loop registers every accepted socket and holds the only
//! long-lived strong reference to the ledger; request handlers query the
//! count through [`LedgerHandle`], which deliberately cannot keep the
//! ledger alive on its own.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use async_trait::async_trait;
use dashmap::DashMap;

use connpulse_core::{PulseError, Result};

struct SocketEntry {
    peer: SocketAddr,
}

/// `connection id -> peer` for every socket currently open. Entries live
/// exactly as long as their [`ConnectionGuard`].
#[derive(Default)]
pub struct ConnectionLedger {
    open: DashMap<u64, SocketEntry>,
    seq: AtomicU64,
}

impl ConnectionLedger {
    pub fn new() -> Self {
        Self {
            open: DashMap::new(),
            seq: AtomicU64::new(1),
        }
    }

    /// Register an accepted socket; the returned guard withdraws the entry
    /// on drop.
    pub fn register(self: &Arc<Self>, peer: SocketAddr) -> ConnectionGuard {
        let id = self.seq.fetch_add(1, Ordering::Relaxed);
        self.open.insert(id, SocketEntry { peer });
        tracing::debug!(id, %peer, "connection open");
        ConnectionGuard {
            ledger: Arc::clone(self),
            id,
        }
    }

    /// Number of currently open connections.
    pub fn count(&self) -> usize {
        self.open.len()
    }

    /// Query handle that does not keep the ledger alive.
    pub fn handle(self: &Arc<Self>) -> LedgerHandle {
        LedgerHandle {
            ledger: Arc::downgrade(self),
        }
    }

    fn withdraw(&self, id: u64) {
        if let Some((_, entry)) = self.open.remove(&id) {
            tracing::debug!(id, peer = %entry.peer, "connection closed");
        }
    }
}

/// RAII handle for one ledger entry.
pub struct ConnectionGuard {
    ledger: Arc<ConnectionLedger>,
    id: u64,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.ledger.withdraw(self.id);
    }
}

/// Seam for querying the open-connection count.
///
/// Async and fallible on purpose: the query reaches state owned by the
/// listener, and the listener can be gone.
#[async_trait]
pub trait OpenConnections: Send + Sync {
    async fn current(&self) -> Result<usize>;
}

/// Production [`OpenConnections`] implementation. Once the accept loop (the
/// only long-lived strong owner) has exited, queries fail and callers take
/// their drop path.
#[derive(Clone)]
pub struct LedgerHandle {
    ledger: Weak<ConnectionLedger>,
}

#[async_trait]
impl OpenConnections for LedgerHandle {
    async fn current(&self) -> Result<usize> {
        match self.ledger.upgrade() {
            Some(ledger) => Ok(ledger.count()),
            None => Err(PulseError::CountUnavailable),
        }
    }
}
