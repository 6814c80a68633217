//! Storefront server entry point.
//!
//! Startup order matters: tracing first so configuration problems are
//! visible, then configuration, then state, then the listener.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront::state::{AppState, StoreConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Invalid configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(bind = %config.bind_addr, "Loaded storefront configuration");

    let state = AppState::new(config.clone());
    let app = storefront::build_router(state);

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%error, addr = %config.bind_addr, "Failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!(addr = %config.bind_addr, "Storefront listening");

    if let Err(error) = axum::serve(listener, app).await {
        tracing::error!(%error, "Server exited with error");
        std::process::exit(1);
    }
}
