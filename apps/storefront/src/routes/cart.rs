//! # Cart Routes
//!
//! Endpoints for the server-held shopping cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │   Form   │     │ Confirmed│       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_item          POST /checkout                      │
//! │                   update_item       (checkout.rs)                       │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear ───────────────────────────► (back to empty)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Every mutation returns the full updated cart so the frontend can render
//! without a second round trip.

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use atelier_core::{format_price, Cart, CartLineItem, CartTotals, Currency, Money};

use crate::error::ApiError;
use crate::state::AppState;

/// Builds the cart sub-router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cart", get(get_cart).delete(clear_cart))
        .route("/cart/items", post(add_item))
        .route(
            "/cart/items/{product_id}",
            delete(remove_item).patch(update_item),
        )
}

// =============================================================================
// Request / Response Types
// =============================================================================

/// Body for `POST /cart/items`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: String,
    /// Defaults to 1 when omitted.
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// Body for `PATCH /cart/items/{product_id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub quantity: i64,
}

/// One cart line with its display price in the session currency.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    #[serde(flatten)]
    pub item: CartLineItem,
    pub display_unit_price: String,
    pub display_line_total: String,
}

/// Cart response: items, totals, and the formatted subtotal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItemView>,
    pub totals: CartTotals,
    pub display_subtotal: String,
}

impl CartResponse {
    /// Renders the cart in the given display currency.
    ///
    /// Each line uses its own frozen exchange rate; the subtotal uses the
    /// cart's display rate.
    pub fn render(cart: &Cart, currency: Currency) -> Self {
        let items = cart
            .items
            .iter()
            .map(|item| CartItemView {
                display_unit_price: format_price(
                    Money::from_cents(item.unit_price_cents),
                    item.exchange_rate(),
                    currency,
                ),
                display_line_total: format_price(
                    item.line_total(),
                    item.exchange_rate(),
                    currency,
                ),
                item: item.clone(),
            })
            .collect();

        CartResponse {
            items,
            totals: CartTotals::from(cart),
            display_subtotal: format_price(cart.subtotal(), cart.display_rate(), currency),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Current cart contents.
async fn get_cart(State(state): State<AppState>) -> Json<CartResponse> {
    let currency = state.currency.get();
    Json(state.cart.with_cart(|cart| CartResponse::render(cart, currency)))
}

/// Adds a product to the cart, merging quantity if already present.
///
/// The product is fetched first so the line freezes the current price and
/// exchange rate; a later catalog edit never changes what is in the cart.
async fn add_item(
    State(state): State<AppState>,
    Json(request): Json<AddItemRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    if request.quantity < 1 {
        return Err(ApiError::validation("quantity must be at least 1"));
    }

    let product = state.remote.products().require(&request.product_id).await?;
    debug!(product_id = %product.id, quantity = request.quantity, "Adding to cart");

    let currency = state.currency.get();
    let response = state.cart.with_cart_mut(|cart| {
        cart.add_item(&product, request.quantity);
        CartResponse::render(cart, currency)
    });

    Ok(Json(response))
}

/// Sets a line's quantity; zero or negative removes the line.
async fn update_item(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(request): Json<UpdateItemRequest>,
) -> Json<CartResponse> {
    debug!(%product_id, quantity = request.quantity, "Updating cart line");

    let currency = state.currency.get();
    Json(state.cart.with_cart_mut(|cart| {
        cart.update_quantity(&product_id, request.quantity);
        CartResponse::render(cart, currency)
    }))
}

/// Removes a line; removing an absent product is a no-op.
async fn remove_item(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Json<CartResponse> {
    debug!(%product_id, "Removing cart line");

    let currency = state.currency.get();
    Json(state.cart.with_cart_mut(|cart| {
        cart.remove_item(&product_id);
        CartResponse::render(cart, currency)
    }))
}

/// Empties the cart.
async fn clear_cart(State(state): State<AppState>) -> Json<CartResponse> {
    let currency = state.currency.get();
    Json(state.cart.with_cart_mut(|cart| {
        cart.clear();
        CartResponse::render(cart, currency)
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::Product;
    use chrono::Utc;

    fn sample_product(cents: i64, rate_scaled: u32) -> Product {
        Product {
            id: "p-1".to_string(),
            slug: "atlas-armchair".to_string(),
            name: "Atlas Armchair".to_string(),
            collection: "Wrought".to_string(),
            collection_slug: "wrought".to_string(),
            category: "Seating".to_string(),
            category_slug: "seating".to_string(),
            price_cents: cents,
            exchange_rate_scaled: rate_scaled,
            description: String::new(),
            long_description: String::new(),
            material: None,
            color: None,
            dimensions: None,
            weight: None,
            finish: None,
            images: vec![],
            featured: false,
            product_details: None,
            shipping_info: None,
            returns_info: None,
            homepage_title: None,
            homepage_subtitle: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_formats_in_local_currency() {
        let mut cart = Cart::new();
        // $100.00 at rate 15.0
        cart.add_item(&sample_product(10_000, 150_000), 1);

        let response = CartResponse::render(&cart, Currency::Ghs);

        assert_eq!(response.items[0].display_unit_price, "GH₵1,500.00");
        assert_eq!(response.display_subtotal, "GH₵1,500.00");
        assert_eq!(response.totals.subtotal_cents, 10_000);
    }

    #[test]
    fn test_render_formats_in_base_currency() {
        let mut cart = Cart::new();
        cart.add_item(&sample_product(24_950, 150_000), 2);

        let response = CartResponse::render(&cart, Currency::Usd);

        assert_eq!(response.items[0].display_unit_price, "$249.50");
        assert_eq!(response.items[0].display_line_total, "$499.00");
        assert_eq!(response.display_subtotal, "$499.00");
    }

    #[test]
    fn test_render_empty_cart() {
        let cart = Cart::new();
        let response = CartResponse::render(&cart, Currency::Ghs);

        assert!(response.items.is_empty());
        assert_eq!(response.totals.total_quantity, 0);
        assert_eq!(response.display_subtotal, "GH₵0.00");
    }
}
