//! # Remote Error Types
//!
//! Error types for calls to the hosted data platform.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Transport error (reqwest::Error)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RemoteError (this module) ← adds status/body context                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in the app) ← serialized for the frontend                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Frontend shows a one-shot toast; local state is left unchanged        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors from the remote data platform.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The platform returned a non-2xx status code.
    #[error("Remote API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A response body could not be decoded into the expected row type.
    #[error("Failed to decode remote row: {0}")]
    Decode(#[from] serde_json::Error),

    /// Entity not found in the remote collection.
    ///
    /// ## When This Occurs
    /// - `select_one` matched no rows for a required lookup
    /// - An update/delete targeted an id that no longer exists
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Required configuration is missing or malformed.
    #[error("Remote configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results with RemoteError.
pub type RemoteResult<T> = Result<T, RemoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RemoteError::Api {
            status: 503,
            body: "upstream unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Remote API error (503): upstream unavailable"
        );

        let err = RemoteError::NotFound {
            entity: "Product".to_string(),
            id: "p-1".to_string(),
        };
        assert_eq!(err.to_string(), "Product not found: p-1");
    }
}
