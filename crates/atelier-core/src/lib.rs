//! # atelier-core: Pure Business Logic for the Atelier Storefront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Atelier Storefront Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend (React)                         │   │
//! │  │    Catalog ──► Product Page ──► Cart Drawer ──► Checkout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP/JSON                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Storefront Routes (axum)                     │   │
//! │  │    list_products, add_to_cart, submit_checkout, set_stage       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ atelier-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ currency  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  GH₵/USD  │  │   │
//! │  │   │  Article  │  │  (cents)  │  │ LineItem  │  │ formatter │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 atelier-remote (Data Platform Layer)            │   │
//! │  │         remote tables, object storage, order-confirmation mail  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog and content types (Product, Collection, Article, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`currency`] - Two-currency display formatting with per-item exchange rates
//! - [`cart`] - The shopping cart store and its derived totals
//! - [`order`] - Order snapshots and the five-stage fulfilment tracker
//! - [`error`] - Domain error types
//! - [`validation`] - Form and field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system and remote-table access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use atelier_core::money::Money;
//! use atelier_core::currency::{Currency, ExchangeRate, format_price};
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(10_000); // $100.00
//!
//! // Display in the local currency at a captured exchange rate
//! let rate = ExchangeRate::from_rate(15.0);
//! assert_eq!(format_price(price, rate, Currency::Ghs), "GH₵1,500.00");
//! assert_eq!(format_price(price, rate, Currency::Usd), "$100.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod currency;
pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use atelier_core::Money` instead of
// `use atelier_core::money::Money`

pub use cart::{Cart, CartLineItem, CartTotals};
pub use currency::{format_price, Currency, ExchangeRate};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use order::{CheckoutForm, Order, OrderDraft, OrderItem, OrderStage};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol for the local display currency (Ghana cedi).
///
/// Kept in one place so the formatter and any receipt-style output agree.
pub const LOCAL_CURRENCY_SYMBOL: &str = "GH₵";

/// Fallback exchange rate used when a catalog row carries none.
///
/// ## Why a constant?
/// Every product row carries its own base→local rate captured by the admin,
/// but legacy rows predate that column. 15.0 matches the rate the store
/// launched with.
pub const DEFAULT_EXCHANGE_RATE: f64 = 15.0;
