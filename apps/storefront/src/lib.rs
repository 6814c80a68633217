//! # Storefront HTTP Application
//!
//! The JSON API serving the Atelier furniture storefront: catalog reads,
//! the server-held shopping cart, the currency toggle, checkout, and the
//! admin dashboard.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Request Flow                            │
//! │                                                                         │
//! │  Browser ──► axum Router ──► route handler ──► AppState                 │
//! │                                    │              │                     │
//! │                                    │              ├── CartState         │
//! │                                    │              ├── CurrencyState     │
//! │                                    │              └── Remote (platform) │
//! │                                    ▼                                    │
//! │              Result<Json<T>, ApiError> ──► JSON response               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`state`] - Shared application state (cart, currency, config, remote)
//! - [`routes`] - Route handlers grouped by concern
//! - [`error`] - The [`error::ApiError`] type every handler returns

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Builds the full application router with middleware.
///
/// Extracted from `main` so integration tests can mount the exact same
/// stack against an in-memory listener.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::catalog::router())
        .merge(routes::cart::router())
        .merge(routes::currency::router())
        .merge(routes::checkout::router())
        .merge(routes::inquiries::router())
        .merge(routes::admin::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
