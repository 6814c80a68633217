//! # Checkout Route
//!
//! Turns the current cart plus the customer form into a persisted order.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    POST /checkout                                       │
//! │                                                                         │
//! │  1. Validate form + snapshot cart ──► OrderDraft                        │
//! │        (empty cart / bad form ► error, cart untouched)                  │
//! │  2. Submit draft to the platform ──► persisted Order                    │
//! │        (remote failure ► error, cart untouched, customer retries)       │
//! │  3. Dispatch confirmation e-mail (background, never blocks)             │
//! │  4. Clear the cart                                                      │
//! │  5. Return the order                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! The cart is cleared only after the order is safely persisted, so any
//! failure leaves the customer exactly where they were.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use atelier_core::{CheckoutForm, Order, OrderDraft};

use crate::error::ApiError;
use crate::state::AppState;

/// Builds the checkout sub-router.
pub fn router() -> Router<AppState> {
    Router::new().route("/checkout", post(submit_checkout))
}

/// Places an order from the current cart.
async fn submit_checkout(
    State(state): State<AppState>,
    Json(form): Json<CheckoutForm>,
) -> Result<Json<Order>, ApiError> {
    // Snapshot under the lock; the draft owns its own copies after this.
    let draft = state
        .cart
        .with_cart(|cart| OrderDraft::from_cart(cart, &form))?;

    let order = state.remote.orders().submit(&draft).await?;
    info!(
        order_id = %order.id,
        customer = %order.customer_email,
        total_cents = order.total_price_cents,
        "Order placed"
    );

    state.remote.mailer().dispatch(&order);
    state.cart.with_cart_mut(|cart| cart.clear());

    Ok(Json(order))
}
