//! # Remote Configuration
//!
//! Endpoint and credential configuration for the hosted platform.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ATELIER_*`)
//! 2. Defaults (local development emulator)
//!
//! The API key is the platform's public ("anon") key - row-level security on
//! the hosted tables is what actually guards writes, so shipping this key to
//! clients is expected.

use crate::error::{RemoteError, RemoteResult};

/// Configuration for every remote collaborator.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the hosted project, e.g. `https://xyz.example.co`.
    /// The REST, storage and functions endpoints all hang off this.
    pub base_url: String,

    /// Public API key sent as `apikey` + bearer token.
    pub api_key: String,

    /// Storage bucket for uploaded images.
    pub storage_bucket: String,
}

impl RemoteConfig {
    /// Reads configuration from the environment.
    ///
    /// ## Environment Variables
    /// - `ATELIER_REMOTE_URL` (required): project base URL
    /// - `ATELIER_REMOTE_KEY` (required): public API key
    /// - `ATELIER_STORAGE_BUCKET` (optional): bucket name, default `media`
    pub fn from_env() -> RemoteResult<Self> {
        let base_url = std::env::var("ATELIER_REMOTE_URL")
            .map_err(|_| RemoteError::Config("ATELIER_REMOTE_URL is not set".to_string()))?;
        let api_key = std::env::var("ATELIER_REMOTE_KEY")
            .map_err(|_| RemoteError::Config("ATELIER_REMOTE_KEY is not set".to_string()))?;
        let storage_bucket =
            std::env::var("ATELIER_STORAGE_BUCKET").unwrap_or_else(|_| "media".to_string());

        Ok(RemoteConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            storage_bucket,
        })
    }

    /// Configuration pointing at a local platform emulator. Used by tests
    /// and development without environment setup.
    pub fn local() -> Self {
        RemoteConfig {
            base_url: "http://127.0.0.1:54321".to_string(),
            api_key: "local-dev-key".to_string(),
            storage_bucket: "media".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_defaults() {
        let config = RemoteConfig::local();
        assert_eq!(config.base_url, "http://127.0.0.1:54321");
        assert_eq!(config.storage_bucket, "media");
    }
}
