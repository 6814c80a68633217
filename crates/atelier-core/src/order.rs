//! # Order Module
//!
//! Order snapshots built at checkout, and the five-stage fulfilment tracker.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Lifecycle                                    │
//! │                                                                         │
//! │  Cart ──► OrderDraft (snapshot) ──► inserted into `orders` table       │
//! │                                          │                              │
//! │                                          ▼                              │
//! │   confirmed ─► procurement ─► production ─► shipping ─► delivered      │
//! │                                                                         │
//! │  The admin tracker may set ANY stage directly, including an earlier    │
//! │  one - manual correction is allowed, regressions are logged upstream.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! An order freezes customer details, line items and the total at submission
//! time. Later catalog edits never change what was ordered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::cart::{Cart, CartLineItem};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_customer_name, validate_email};

// =============================================================================
// Order Stage
// =============================================================================

/// Fulfilment progress of a submitted order.
///
/// A strictly ordered five-stage sequence. The ordering is meaningful
/// ([`OrderStage::position`]), but transitions are not enforced to be
/// forward-only: the admin dashboard may correct an order back to an
/// earlier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStage {
    /// Order received and confirmed.
    Confirmed,
    /// Materials being sourced.
    Procurement,
    /// Piece being made in the workshop.
    Production,
    /// On its way to the customer.
    Shipping,
    /// Delivered. Not a locked terminal state - corrections remain possible.
    Delivered,
}

impl OrderStage {
    /// All stages in fulfilment order.
    pub const ALL: [OrderStage; 5] = [
        OrderStage::Confirmed,
        OrderStage::Procurement,
        OrderStage::Production,
        OrderStage::Shipping,
        OrderStage::Delivered,
    ];

    /// Zero-based position in the fulfilment sequence.
    pub fn position(&self) -> usize {
        match self {
            OrderStage::Confirmed => 0,
            OrderStage::Procurement => 1,
            OrderStage::Production => 2,
            OrderStage::Shipping => 3,
            OrderStage::Delivered => 4,
        }
    }

    /// Stable string form, matching the remote `order_status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStage::Confirmed => "confirmed",
            OrderStage::Procurement => "procurement",
            OrderStage::Production => "production",
            OrderStage::Shipping => "shipping",
            OrderStage::Delivered => "delivered",
        }
    }

    /// Parses the remote string form. Unknown strings yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        OrderStage::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// True when moving to `next` walks backwards in the sequence.
    ///
    /// Regressions are permitted (manual correction) but worth logging.
    pub fn is_regression_to(&self, next: OrderStage) -> bool {
        next.position() < self.position()
    }
}

impl Default for OrderStage {
    fn default() -> Self {
        OrderStage::Confirmed
    }
}

impl fmt::Display for OrderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item frozen into an order at submission time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    /// Unit price in base-currency cents at submission time.
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub collection: String,
}

impl From<&CartLineItem> for OrderItem {
    fn from(item: &CartLineItem) -> Self {
        OrderItem {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            unit_price_cents: item.unit_price_cents,
            quantity: item.quantity,
            collection: item.collection.clone(),
        }
    }
}

impl OrderItem {
    /// Line total in base cents.
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}

// =============================================================================
// Checkout Form
// =============================================================================

/// Customer/shipping fields collected by the checkout page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    /// Optional - empty strings are normalized to `None` upstream.
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl CheckoutForm {
    /// Validates required fields. Runs before any remote call; a failure
    /// here never reaches the data platform.
    pub fn validate(&self) -> CoreResult<()> {
        validate_customer_name(&self.name)?;
        validate_email(&self.email)?;
        Ok(())
    }

    /// Returns `value` with empty/whitespace-only strings mapped to `None`.
    pub fn normalize_optional(value: &Option<String>) -> Option<String> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

// =============================================================================
// Order Draft & Order
// =============================================================================

/// What checkout submits: a full snapshot of customer info, items and total.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub shipping_address: Option<String>,
    pub order_notes: Option<String>,
    pub items: Vec<OrderItem>,
    /// Sum of unit_price × quantity over the items, in base cents.
    pub total_price_cents: i64,
}

impl OrderDraft {
    /// Builds an order draft from the current cart and a validated form.
    ///
    /// ## Errors
    /// - [`CoreError::EmptyCart`] when the cart has no items
    /// - [`CoreError::Validation`] when required form fields are missing
    pub fn from_cart(cart: &Cart, form: &CheckoutForm) -> CoreResult<Self> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        form.validate()?;

        let items: Vec<OrderItem> = cart.items.iter().map(OrderItem::from).collect();
        let total_price_cents = cart.subtotal_cents();

        Ok(OrderDraft {
            customer_name: form.name.trim().to_string(),
            customer_email: form.email.trim().to_string(),
            customer_phone: CheckoutForm::normalize_optional(&form.phone),
            shipping_address: CheckoutForm::normalize_optional(&form.address),
            order_notes: CheckoutForm::normalize_optional(&form.notes),
            items,
            total_price_cents,
        })
    }

    /// Total as Money.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents)
    }
}

/// A submitted order as read back from the remote `orders` table.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub shipping_address: Option<String>,
    pub order_notes: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_price_cents: i64,
    pub status: OrderStage,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::ExchangeRate;
    use crate::types::Product;
    use chrono::Utc;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            slug: format!("product-{}", id),
            name: format!("Product {}", id),
            collection: "Wrought".to_string(),
            collection_slug: "wrought".to_string(),
            category: "Seating".to_string(),
            category_slug: "seating".to_string(),
            price_cents,
            exchange_rate_scaled: ExchangeRate::from_rate(15.0).scaled(),
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

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            name: "Ama Mensah".to_string(),
            email: "ama@example.com".to_string(),
            phone: Some("".to_string()),
            address: Some("12 Oxford St, Accra".to_string()),
            notes: None,
        }
    }

    #[test]
    fn test_stage_sequence() {
        assert_eq!(OrderStage::ALL.len(), 5);
        assert_eq!(OrderStage::Confirmed.position(), 0);
        assert_eq!(OrderStage::Delivered.position(), 4);
        assert_eq!(OrderStage::default(), OrderStage::Confirmed);
    }

    #[test]
    fn test_stage_parse_round_trip() {
        for stage in OrderStage::ALL {
            assert_eq!(OrderStage::parse(stage.as_str()), Some(stage));
        }
        assert_eq!(OrderStage::parse("cancelled"), None);
    }

    #[test]
    fn test_stage_regression_detection() {
        assert!(OrderStage::Shipping.is_regression_to(OrderStage::Procurement));
        assert!(!OrderStage::Procurement.is_regression_to(OrderStage::Shipping));
        // Setting the same stage again is not a regression
        assert!(!OrderStage::Production.is_regression_to(OrderStage::Production));
        // Delivered is not locked
        assert!(OrderStage::Delivered.is_regression_to(OrderStage::Confirmed));
    }

    #[test]
    fn test_stage_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStage::Procurement).unwrap(),
            "\"procurement\""
        );
    }

    #[test]
    fn test_draft_from_cart_snapshots_items_and_total() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 10_000), 2);
        cart.add_item(&test_product("b", 5_000), 1);

        let draft = OrderDraft::from_cart(&cart, &valid_form()).unwrap();

        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.total_price_cents, 25_000);
        assert_eq!(draft.items[0].line_total_cents(), 20_000);
        // Empty phone string normalized away
        assert_eq!(draft.customer_phone, None);
        assert_eq!(
            draft.shipping_address.as_deref(),
            Some("12 Oxford St, Accra")
        );
    }

    #[test]
    fn test_draft_empty_cart_rejected() {
        let cart = Cart::new();
        let err = OrderDraft::from_cart(&cart, &valid_form()).unwrap_err();
        assert!(matches!(err, CoreError::EmptyCart));
    }

    #[test]
    fn test_draft_missing_name_rejected() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 10_000), 1);

        let mut form = valid_form();
        form.name = "  ".to_string();

        let err = OrderDraft::from_cart(&cart, &form).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_draft_bad_email_rejected() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 10_000), 1);

        let mut form = valid_form();
        form.email = "not-an-email".to_string();

        let err = OrderDraft::from_cart(&cart, &form).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
