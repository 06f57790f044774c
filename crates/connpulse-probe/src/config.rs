//! Probe config loader.
//!
//! The responder's entire external configuration is one environment
//! variable naming the listening port, read once at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use connpulse_core::{PulseError, Result};

/// Environment variable naming the listening port.
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    pub port: u16,
}

impl ProbeConfig {
    /// Listening address on all interfaces.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

pub fn from_env() -> Result<ProbeConfig> {
    from_port_value(std::env::var(PORT_ENV).ok().as_deref())
}

/// Parse the raw port value. Split out of [`from_env`] so tests never have
/// to touch the process environment.
pub fn from_port_value(raw: Option<&str>) -> Result<ProbeConfig> {
    let raw = raw.ok_or_else(|| PulseError::Config(format!("{PORT_ENV} is not set")))?;
    let port: u16 = raw
        .trim()
        .parse()
        .map_err(|_| PulseError::Config(format!("{PORT_ENV} must be a port number, got {raw:?}")))?;
    Ok(ProbeConfig { port })
}
