//! Socket-level serving: the live-connection ledger and the accept loop.

pub mod ledger;
pub mod serve;

pub use ledger::{ConnectionGuard, ConnectionLedger, LedgerHandle, OpenConnections};
pub use serve::serve;
