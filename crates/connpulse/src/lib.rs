//! Top-level facade crate for connpulse.
//!
//! Re-exports the core primitives, the probe responder library, and the
//! load driver so users can depend on a single crate.

pub mod core {
    pub use connpulse_core::*;
}

pub mod probe {
    pub use connpulse_probe::*;
}

pub mod loadtest {
    pub use connpulse_loadtest::*;
}
