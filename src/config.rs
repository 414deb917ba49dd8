use core::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use anyhow::Context;

/// Upper bound for a single write to the client, and for any formatted
/// fragment of the main page.
pub const OUTPUT_BUFFER_SIZE: usize = 96;

/// Size of the buffer the request head is parsed in. Longer heads are
/// answered with 400.
pub const UIP_BUFFER_SIZE: usize = 2048;

/// Most request headers accepted.
pub const MAX_HEADERS: usize = 32;

/// How long a closed connection may keep sending before it is dropped.
pub const DRAIN_TIMEOUT_SECS: u64 = 5;

/// Upper bound for each formatted fragment of the stats page.
pub const STATS_FRAGMENT_SIZE: usize = 64;

pub const DEFAULT_PORT: u16 = 1000;

pub const ADDR_ENV: &str = "INTERACTIVE_SERVER_ADDR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_addr_var(std::env::var(ADDR_ENV).ok().as_deref())
    }

    fn from_addr_var(value: Option<&str>) -> anyhow::Result<Self> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => {
                let addr = raw
                    .parse::<SocketAddr>()
                    .with_context(|| format!("invalid {ADDR_ENV} value {raw:?}"))?;
                Ok(Self { addr })
            }
            None => Ok(Self::default()),
        }
    }
}
