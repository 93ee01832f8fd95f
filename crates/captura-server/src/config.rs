//! Server configuration for Captura.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `CAPTURA_*` environment variables.

use std::net::SocketAddr;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Submission store backend.
    pub store: StoreBackendType,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
}

/// Supported submission store backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackendType {
    /// In-memory (development only, submissions lost on restart).
    Memory,
    /// Flat JSON file.
    File { path: String },
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (PaaS convention, binds to `0.0.0.0`)
    /// - `CAPTURA_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:8080`)
    /// - `CAPTURA_STORE` — `file` or `memory` (default: `file`)
    /// - `CAPTURA_SUBMISSIONS_FILE` — path for the file store (default: `submissions.json`)
    /// - `CAPTURA_LOG_LEVEL` — log filter (default: `info`)
    #[must_use]
    pub fn from_env() -> Self {
        let bind_addr = if let Ok(addr) = std::env::var("CAPTURA_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8080)))
        } else if let Ok(port_str) = std::env::var("PORT") {
            let port: u16 = port_str.parse().unwrap_or(8080);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 8080))
        };

        let submissions_file = std::env::var("CAPTURA_SUBMISSIONS_FILE")
            .unwrap_or_else(|_| "submissions.json".to_owned());

        let store = match std::env::var("CAPTURA_STORE")
            .unwrap_or_else(|_| "file".to_owned())
            .to_lowercase()
            .as_str()
        {
            "memory" => StoreBackendType::Memory,
            _ => StoreBackendType::File {
                path: submissions_file,
            },
        };

        let log_level = std::env::var("CAPTURA_LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());

        Self {
            bind_addr,
            store,
            log_level,
        }
    }
}
