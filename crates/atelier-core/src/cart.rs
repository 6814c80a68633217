//! # Cart Store
//!
//! The shopping cart: an ordered collection of line items keyed by product
//! identity, with derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Frontend Action         Route                    Cart Change           │
//! │  ───────────────         ─────                    ───────────           │
//! │                                                                         │
//! │  "Add to Cart" ─────────► POST /cart/items ─────► merge or append      │
//! │                                                                         │
//! │  +/- stepper ───────────► PATCH /cart/items/:id ► qty = n (0 removes)  │
//! │                                                                         │
//! │  "X" button ────────────► DELETE /cart/items/:id► retain(≠ id)         │
//! │                                                                         │
//! │  "Clear Cart" ──────────► DELETE /cart ─────────► items.clear()        │
//! │                                                                         │
//! │  Every mutation is followed by a snapshot to durable storage so the    │
//! │  cart survives a restart (handled by the app's CartState wrapper).     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line item per `product_id`; adding a product already present
//!   increments its quantity instead of duplicating the line.
//! - `quantity` is always ≥ 1; updating to 0 (or below) removes the line.
//! - Derived totals are pure recomputation over the items - no cached sums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::ExchangeRate;
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line Item
// =============================================================================

/// One distinct product entry in the cart, with an aggregated quantity.
///
/// ## Snapshot Pattern
/// Display metadata and the unit price are copied from the product at
/// add-time. If the catalog row changes afterwards, the cart keeps showing
/// (and charging) what the shopper saw when they added it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product ID (UUID) - the line's identity.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Card image URL at time of adding, when the gallery had one.
    pub image_url: Option<String>,

    /// Collection label at time of adding (frozen).
    pub collection: String,

    /// Unit price in base-currency cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// USD→GHS rate captured at add-time, fixed-point scaled by 10,000.
    pub exchange_rate_scaled: u32,

    /// Quantity in cart (always ≥ 1).
    pub quantity: i64,

    /// When this item was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Creates a new line item from a product and quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.primary_image().map(str::to_string),
            collection: product.collection.clone(),
            unit_price_cents: product.price_cents,
            exchange_rate_scaled: product.exchange_rate_scaled,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × quantity) in base cents.
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }

    /// Returns the captured exchange rate.
    #[inline]
    pub fn exchange_rate(&self) -> ExchangeRate {
        ExchangeRate::from_scaled(self.exchange_rate_scaled)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart, in the order they were first added.
    pub items: Vec<CartLineItem>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart, or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If product already in cart: quantity increases by `quantity`
    /// - If product not in cart: appended as a new line item
    ///
    /// Callers always pass a quantity ≥ 1, so there is no error path.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
        {
            item.quantity += quantity;
            return;
        }

        self.items.push(CartLineItem::from_product(product, quantity));
    }

    /// Updates the quantity of an item in the cart.
    ///
    /// ## Behavior
    /// - Quantity ≤ 0: removes the item
    /// - Product not in cart: no-op
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Removes an item from the cart by product ID. No-op when absent.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of unique line items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all line items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the subtotal in base-currency cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exchange rate used when rendering the cart-wide subtotal.
    ///
    /// Rates are captured per item; the first item's rate stands in for the
    /// whole cart (items added in one session share the same store rate).
    /// Falls back to the default rate for an empty cart.
    pub fn display_rate(&self) -> ExchangeRate {
        self.items
            .first()
            .map(CartLineItem::exchange_rate)
            .unwrap_or_default()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_product(id: &str, price_cents: i64, rate: f64) -> Product {
        Product {
            id: id.to_string(),
            slug: format!("product-{}", id),
            name: format!("Product {}", id),
            collection: "Wrought".to_string(),
            collection_slug: "wrought".to_string(),
            category: "Seating".to_string(),
            category_slug: "seating".to_string(),
            price_cents,
            exchange_rate_scaled: ExchangeRate::from_rate(rate).scaled(),
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
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 10_000, 15.0), 2);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal_cents(), 20_000);
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new();
        let product = test_product("a", 10_000, 15.0);

        cart.add_item(&product, 1);
        cart.add_item(&product, 2);

        // Still one line item for A, quantity 3
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_two_products_totals() {
        // A (price 100, rate 15) ×2, B (price 50, rate 15) ×1
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 10_000, 15.0), 2);
        cart.add_item(&test_product("b", 5_000, 15.0), 1);

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal_cents(), 25_000); // $250.00
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 10_000, 15.0), 1);

        cart.remove_item("missing");

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.subtotal_cents(), 10_000);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 10_000, 15.0), 1);

        cart.update_quantity("a", 5);

        assert_eq!(cart.items[0].quantity, 5);
        assert_eq!(cart.subtotal_cents(), 50_000);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 10_000, 15.0), 1);

        cart.update_quantity("a", 0);

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 10_000, 15.0), 3);

        cart.update_quantity("a", -2);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 10_000, 15.0), 1);

        cart.update_quantity("missing", 7);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 10_000, 15.0), 2);
        cart.add_item(&test_product("b", 5_000, 15.0), 4);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.subtotal_cents(), 0);
    }

    #[test]
    fn test_subtotal_recomputation_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 9_999, 15.0), 3);

        let first = cart.subtotal_cents();
        let second = cart.subtotal_cents();
        assert_eq!(first, second);
        assert_eq!(first, 29_997);
    }

    #[test]
    fn test_display_rate_first_item_wins() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 10_000, 15.5), 1);
        cart.add_item(&test_product("b", 10_000, 16.0), 1);

        assert!((cart.display_rate().rate() - 15.5).abs() < 1e-9);
    }

    #[test]
    fn test_display_rate_empty_cart_uses_default() {
        let cart = Cart::new();
        assert!((cart.display_rate().rate() - crate::DEFAULT_EXCHANGE_RATE).abs() < 1e-9);
    }

    #[test]
    fn test_line_snapshot_freezes_price() {
        let mut cart = Cart::new();
        let mut product = test_product("a", 10_000, 15.0);
        cart.add_item(&product, 1);

        // Catalog price changes after the item is in the cart
        product.price_cents = 99_999;

        assert_eq!(cart.items[0].unit_price_cents, 10_000);
    }
}
