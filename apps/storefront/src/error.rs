//! # API Error Type
//!
//! Unified error type for route handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Handler returns Result<Json<T>, ApiError>                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Remote failure? ─── RemoteError::Api { 500, ... } ──┐                  │
//! │         │                                            │                  │
//! │         ▼                                            ▼                  │
//! │  Domain failure? ─── CoreError::EmptyCart ───────► ApiError ──► JSON    │
//! │                                                                         │
//! │  Frontend receives: { "code": "EMPTY_CART", "message": "..." }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Remote failures are logged with their full body but surfaced to the
//! client as a generic upstream message; domain failures pass through
//! verbatim since they are written for display.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use atelier_core::CoreError;
use atelier_remote::RemoteError;

/// API error returned from route handlers.
///
/// ## Serialization
/// ```json
/// { "code": "NOT_FOUND", "message": "Product not found: abc-123" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Checkout attempted with an empty cart (422)
    EmptyCart,

    /// The remote data platform rejected or failed the call (502)
    UpstreamError,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::EmptyCart => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::UpstreamError => StatusCode::BAD_GATEWAY,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts domain errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::OrderNotFound(id) => ApiError::not_found("Order", &id),
            CoreError::EmptyCart => ApiError::new(
                ErrorCode::EmptyCart,
                "Cannot place an order with an empty cart",
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts remote platform errors to API errors.
impl From<RemoteError> for ApiError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            RemoteError::Api { status, body } => {
                tracing::error!(status, %body, "Remote platform error");
                ApiError::new(ErrorCode::UpstreamError, "Data platform request failed")
            }
            RemoteError::Request(e) => {
                tracing::error!(error = %e, "Remote request failed");
                ApiError::new(ErrorCode::UpstreamError, "Data platform unreachable")
            }
            RemoteError::Decode(e) => {
                tracing::error!(error = %e, "Remote response decode failed");
                ApiError::new(ErrorCode::UpstreamError, "Data platform returned bad data")
            }
            RemoteError::Config(message) => {
                tracing::error!(%message, "Remote configuration error");
                ApiError::internal("Service misconfigured")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        (status, Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::ValidationError;

    #[test]
    fn test_empty_cart_maps_to_unprocessable() {
        let api: ApiError = CoreError::EmptyCart.into();
        assert_eq!(api.code, ErrorCode::EmptyCart);
        assert_eq!(api.code.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_validation_passes_message_through() {
        let api: ApiError = CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();

        assert_eq!(api.code, ErrorCode::ValidationError);
        assert!(api.message.contains("name is required"));
    }

    #[test]
    fn test_remote_api_error_is_sanitized() {
        let api: ApiError = RemoteError::Api {
            status: 500,
            body: "secret internals".to_string(),
        }
        .into();

        assert_eq!(api.code, ErrorCode::UpstreamError);
        assert!(!api.message.contains("secret"));
    }

    #[test]
    fn test_serialized_shape() {
        let api = ApiError::not_found("Product", "p-1");
        let value = serde_json::to_value(&api).unwrap();

        assert_eq!(value["code"], "NOT_FOUND");
        assert_eq!(value["message"], "Product not found: p-1");
    }
}
