//! # State Module
//!
//! Shared application state for the axum app.
//!
//! ## State Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   AppState (Clone, with_state)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │          │                  │                  │                        │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │    Remote    │  │  CartState   │  │  CurrencyState   │              │
//! │  │              │  │              │  │                  │              │
//! │  │  platform    │  │  Arc<Mutex<  │  │  Arc<Mutex<      │              │
//! │  │  clients     │  │    Cart>> +  │  │    Currency>>    │              │
//! │  │  (reqwest)   │  │  snapshot    │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Remote: reqwest::Client is internally pooled and thread-safe        │
//! │  • CartState / CurrencyState: Arc<Mutex<T>> for exclusive access       │
//! │  • StoreConfig: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod currency;

pub use cart::CartState;
pub use config::StoreConfig;
pub use currency::CurrencyState;

use atelier_remote::Remote;

/// Everything route handlers can reach.
///
/// Cheap to clone; axum clones it per request.
#[derive(Clone)]
pub struct AppState {
    pub config: StoreConfig,
    pub remote: Remote,
    pub cart: CartState,
    pub currency: CurrencyState,
}

impl AppState {
    /// Builds production state: remote clients from config, cart restored
    /// from its on-disk snapshot.
    pub fn new(config: StoreConfig) -> Self {
        let remote = Remote::new(config.remote.clone());
        let cart = CartState::restore();
        let currency = CurrencyState::new();

        AppState {
            config,
            remote,
            cart,
            currency,
        }
    }

    /// Builds state for tests: in-memory cart, local platform endpoints.
    pub fn for_tests() -> Self {
        let config = StoreConfig::local();
        AppState {
            remote: Remote::new(config.remote.clone()),
            cart: CartState::in_memory(),
            currency: CurrencyState::new(),
            config,
        }
    }
}
