//! API configuration from the environment.

use std::net::SocketAddr;

/// Runtime configuration for the API binary.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Socket address to bind on.
    pub bind: SocketAddr,
}

impl ApiConfig {
    /// Read configuration from the environment.
    ///
    /// `FLOWMAP_BIND` overrides the bind address; unparseable values fall
    /// back to the default `0.0.0.0:8000`.
    #[must_use]
    pub fn from_env() -> Self {
        let bind = std::env::var("FLOWMAP_BIND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

        Self { bind }
    }
}
