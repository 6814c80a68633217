//! # atelier-remote: Data Platform Layer for the Atelier Storefront
//!
//! This crate provides access to the hosted backend-as-a-service platform:
//! the tabular REST API, object storage, and the order-confirmation mail
//! function. Everything the storefront persists lives behind these clients.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Data Flow                                │
//! │                                                                         │
//! │  Route handler (list_products, submit_checkout, ...)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  atelier-remote (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ RemoteClient  │    │ Repositories  │    │ Storage &    │  │   │
//! │  │   │ (client.rs)   │    │ (products,    │    │ Mailer       │  │   │
//! │  │   │               │◄───│  orders, ...) │    │              │  │   │
//! │  │   │ reqwest +     │    │ typed rows →  │    │ uploads,     │  │   │
//! │  │   │ eq filters    │    │ domain types  │    │ order mail   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Hosted platform: /rest/v1/{table}  /storage/v1  /functions/v1         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Endpoint/key configuration from the environment
//! - [`client`] - Generic typed table client (select/insert/update/delete)
//! - [`repository`] - One repository per collection, typed at the boundary
//! - [`storage`] - Object uploads and public URL derivation
//! - [`mailer`] - Order-confirmation e-mail (fire-and-forget)
//! - [`error`] - Remote error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use atelier_remote::{Remote, RemoteConfig};
//!
//! let remote = Remote::new(RemoteConfig::from_env()?);
//! let products = remote.products().list().await?;
//! let order = remote.orders().submit(&draft).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod mailer;
pub mod repository;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{Filter, OrderBy, RemoteClient};
pub use config::RemoteConfig;
pub use error::{RemoteError, RemoteResult};
pub use mailer::{ConfirmationEmail, Mailer};
pub use storage::StorageClient;

use repository::content::ContentRepository;
use repository::inquiries::InquiryRepository;
use repository::orders::OrderRepository;
use repository::products::ProductRepository;

/// Facade over every remote collaborator the storefront talks to.
///
/// Cheap to clone: the underlying HTTP client pools connections and all
/// repositories borrow the same [`RemoteClient`].
#[derive(Debug, Clone)]
pub struct Remote {
    client: RemoteClient,
    storage: StorageClient,
    mailer: Mailer,
}

impl Remote {
    /// Creates the facade from configuration.
    pub fn new(config: RemoteConfig) -> Self {
        let http = reqwest::Client::new();
        let client = RemoteClient::with_client(http.clone(), &config);
        let storage = StorageClient::with_client(http.clone(), &config);
        let mailer = Mailer::with_client(http, &config);

        Remote {
            client,
            storage,
            mailer,
        }
    }

    /// Product catalog operations.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.client.clone())
    }

    /// Order submission and admin operations.
    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.client.clone())
    }

    /// Contact-form inquiries.
    pub fn inquiries(&self) -> InquiryRepository {
        InquiryRepository::new(self.client.clone())
    }

    /// Collections, categories and articles.
    pub fn content(&self) -> ContentRepository {
        ContentRepository::new(self.client.clone())
    }

    /// Object storage (product/article images).
    pub fn storage(&self) -> &StorageClient {
        &self.storage
    }

    /// Order-confirmation mail dispatch.
    pub fn mailer(&self) -> &Mailer {
        &self.mailer
    }
}
