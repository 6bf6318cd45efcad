//! HTTP API configuration.
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

/// Configuration for the whitelist HTTP API.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct HttpApi {
    /// Weather the HTTP API is enabled or not.
    #[serde(default = "HttpApi::default_enabled")]
    pub enabled: bool,
    /// The address the API will bind to.
    /// The format is `ip:port`, for example `127.0.0.1:3000`. If you want to
    /// listen to all interfaces, use `0.0.0.0`. If you want the operating
    /// system to choose a random port, use port `0`.
    #[serde(default = "HttpApi::default_bind_address")]
    pub bind_address: SocketAddr,
    /// Weather the API answers cross-origin requests. Enable it when the
    /// whitelist is managed from a browser frontend on another origin; bot
    /// and launcher clients do not need it.
    #[serde(default = "HttpApi::default_cors_enabled")]
    pub cors_enabled: bool,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            bind_address: Self::default_bind_address(),
            cors_enabled: Self::default_cors_enabled(),
        }
    }
}

impl HttpApi {
    fn default_enabled() -> bool {
        true
    }

    fn default_bind_address() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 3000)
    }

    fn default_cors_enabled() -> bool {
        false
    }
}
