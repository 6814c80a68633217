//! # Configuration State
//!
//! Storefront configuration loaded once at startup.
//!
//! ## Environment Variables
//! ```text
//! ATELIER_BIND           listen address       default 127.0.0.1:8700
//! ATELIER_REMOTE_URL     platform base URL    required
//! ATELIER_REMOTE_KEY     platform API key     required
//! ATELIER_STORAGE_BUCKET storage bucket       default "media"
//! ```
//! Read-only after initialization, so no lock is needed.

use atelier_remote::{RemoteConfig, RemoteResult};

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Listen address for the HTTP server.
    pub bind_addr: String,

    /// Remote data platform endpoints and credentials.
    pub remote: RemoteConfig,
}

impl StoreConfig {
    /// Loads configuration from the environment.
    pub fn from_env() -> RemoteResult<Self> {
        let bind_addr =
            std::env::var("ATELIER_BIND").unwrap_or_else(|_| "127.0.0.1:8700".to_string());

        Ok(StoreConfig {
            bind_addr,
            remote: RemoteConfig::from_env()?,
        })
    }

    /// Local development/test configuration.
    pub fn local() -> Self {
        StoreConfig {
            bind_addr: "127.0.0.1:8700".to_string(),
            remote: RemoteConfig::local(),
        }
    }
}
