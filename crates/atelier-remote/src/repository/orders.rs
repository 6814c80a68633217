//! # Order Repository
//!
//! Submission and admin tracking against the remote `orders` collection.
//!
//! ## Wire Shape
//! The `items` column is a JSON array whose element shape matches what the
//! confirmation-email function reads, so prices travel as decimal dollars
//! there. Quantization back to cents happens in [`OrderItemRow::into_item`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use atelier_core::{Money, Order, OrderDraft, OrderItem, OrderStage};

use crate::client::{Filter, OrderBy, RemoteClient};
use crate::error::{RemoteError, RemoteResult};

const TABLE: &str = "orders";

// =============================================================================
// Row Types
// =============================================================================

/// One element of the `items` JSON column.
///
/// Field names follow the remote convention (`id` for the product id,
/// `price` as decimal dollars).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRow {
    #[serde(rename = "id")]
    pub product_id: String,
    pub name: String,
    /// Unit price as decimal dollars.
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub collection: String,
}

impl OrderItemRow {
    fn from_item(item: &OrderItem) -> Self {
        OrderItemRow {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            price: Money::from_cents(item.unit_price_cents).dollars_f64(),
            quantity: item.quantity,
            collection: item.collection.clone(),
        }
    }

    fn into_item(self) -> OrderItem {
        OrderItem {
            product_id: self.product_id,
            name: self.name,
            unit_price_cents: Money::from_dollars(self.price).cents(),
            quantity: self.quantity,
            collection: self.collection,
        }
    }
}

/// An `orders` row as the platform returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRow {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub shipping_address: Option<String>,
    pub order_notes: Option<String>,
    pub items: Vec<OrderItemRow>,
    /// Decimal dollars.
    pub total_price: f64,
    pub order_status: String,
    pub created_at: DateTime<Utc>,
}

impl OrderRow {
    /// Converts the row into the domain type.
    ///
    /// Unknown status strings (for example rows written by a newer schema)
    /// fall back to the initial stage with a warning rather than failing
    /// the whole listing.
    pub fn into_order(self) -> Order {
        let status = match OrderStage::parse(&self.order_status) {
            Some(stage) => stage,
            None => {
                warn!(
                    order_id = %self.id,
                    status = %self.order_status,
                    "Unknown order status, treating as confirmed"
                );
                OrderStage::default()
            }
        };

        Order {
            id: self.id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            shipping_address: self.shipping_address,
            order_notes: self.order_notes,
            items: self.items.into_iter().map(OrderItemRow::into_item).collect(),
            total_price_cents: Money::from_dollars(self.total_price).cents(),
            status,
            created_at: self.created_at,
        }
    }
}

/// Insert payload for a new order.
#[derive(Debug, Clone, Serialize)]
struct NewOrder {
    customer_name: String,
    customer_email: String,
    customer_phone: Option<String>,
    shipping_address: Option<String>,
    order_notes: Option<String>,
    items: Vec<OrderItemRow>,
    total_price: f64,
    order_status: String,
}

impl NewOrder {
    fn from_draft(draft: &OrderDraft) -> Self {
        NewOrder {
            customer_name: draft.customer_name.clone(),
            customer_email: draft.customer_email.clone(),
            customer_phone: draft.customer_phone.clone(),
            shipping_address: draft.shipping_address.clone(),
            order_notes: draft.order_notes.clone(),
            items: draft.items.iter().map(OrderItemRow::from_item).collect(),
            total_price: draft.total_price().dollars_f64(),
            order_status: OrderStage::Confirmed.as_str().to_string(),
        }
    }
}

/// PATCH payload for a stage change.
#[derive(Debug, Serialize)]
struct StageUpdate {
    order_status: String,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for order submission and tracking.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    client: RemoteClient,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(client: RemoteClient) -> Self {
        OrderRepository { client }
    }

    /// Submits a checkout draft and returns the persisted order.
    pub async fn submit(&self, draft: &OrderDraft) -> RemoteResult<Order> {
        let payload = NewOrder::from_draft(draft);
        let row: OrderRow = self.client.insert(TABLE, &payload).await?;

        debug!(
            order_id = %row.id,
            total = row.total_price,
            items = row.items.len(),
            "Order submitted"
        );
        Ok(row.into_order())
    }

    /// Lists all orders, newest first (admin dashboard).
    pub async fn list(&self) -> RemoteResult<Vec<Order>> {
        let rows: Vec<OrderRow> = self
            .client
            .select(TABLE, &[], Some(OrderBy::desc("created_at")))
            .await?;

        Ok(rows.into_iter().map(OrderRow::into_order).collect())
    }

    /// Looks up one order by id.
    pub async fn get_by_id(&self, id: &str) -> RemoteResult<Option<Order>> {
        let row: Option<OrderRow> = self
            .client
            .select_one(TABLE, &[Filter::eq("id", id)])
            .await?;

        Ok(row.map(OrderRow::into_order))
    }

    /// Like [`Self::get_by_id`] but treats absence as an error.
    pub async fn require(&self, id: &str) -> RemoteResult<Order> {
        self.get_by_id(id).await?.ok_or_else(|| RemoteError::NotFound {
            entity: "Order".to_string(),
            id: id.to_string(),
        })
    }

    /// Sets an order's fulfillment stage.
    ///
    /// Any stage is accepted, including moving backwards; the caller decides
    /// whether a regression is worth flagging.
    pub async fn set_stage(&self, id: &str, stage: OrderStage) -> RemoteResult<()> {
        let payload = StageUpdate {
            order_status: stage.as_str().to_string(),
        };
        self.client.update(TABLE, id, &payload).await?;

        debug!(order_id = %id, stage = %stage, "Order stage updated");
        Ok(())
    }

    /// Deletes an order (admin cleanup).
    pub async fn delete(&self, id: &str) -> RemoteResult<()> {
        self.client.delete(TABLE, id).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::{Cart, CheckoutForm, Product};
    use chrono::Utc;

    fn sample_product(id: &str, cents: i64) -> Product {
        Product {
            id: id.to_string(),
            slug: "atlas-armchair".to_string(),
            name: "Atlas Armchair".to_string(),
            collection: "Wrought".to_string(),
            collection_slug: "wrought".to_string(),
            category: "Seating".to_string(),
            category_slug: "seating".to_string(),
            price_cents: cents,
            exchange_rate_scaled: 150_000,
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
    fn test_row_decodes_with_unknown_status() {
        let json = r#"{
            "id": "ord-1",
            "customer_name": "Ama Mensah",
            "customer_email": "ama@example.com",
            "customer_phone": null,
            "shipping_address": "12 Ring Road, Accra",
            "order_notes": null,
            "items": [{"id": "p-1", "name": "Atlas Armchair", "price": 249.5, "quantity": 2, "collection": "Wrought"}],
            "total_price": 499.0,
            "order_status": "archived",
            "created_at": "2026-02-01T10:00:00Z"
        }"#;

        let row: OrderRow = serde_json::from_str(json).unwrap();
        let order = row.into_order();

        assert_eq!(order.status, OrderStage::Confirmed);
        assert_eq!(order.total_price_cents, 49_900);
        assert_eq!(order.items[0].unit_price_cents, 24_950);
        assert_eq!(order.items[0].line_total_cents(), 49_900);
    }

    #[test]
    fn test_new_order_payload_shape() {
        let mut cart = Cart::new();
        cart.add_item(&sample_product("p-1", 10_050), 2);

        let form = CheckoutForm {
            name: "Ama Mensah".to_string(),
            email: "ama@example.com".to_string(),
            phone: None,
            address: Some("12 Ring Road, Accra".to_string()),
            notes: None,
        };

        let draft = OrderDraft::from_cart(&cart, &form).unwrap();
        let payload = NewOrder::from_draft(&draft);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["order_status"], "confirmed");
        assert_eq!(value["total_price"], 201.0);
        assert_eq!(value["items"][0]["id"], "p-1");
        assert_eq!(value["items"][0]["price"], 100.5);
        assert_eq!(value["items"][0]["quantity"], 2);
    }

    #[test]
    fn test_item_row_round_trips_price() {
        let item = OrderItem {
            product_id: "p-9".to_string(),
            name: "Console".to_string(),
            unit_price_cents: 33_333,
            quantity: 1,
            collection: "Casts".to_string(),
        };

        let row = OrderItemRow::from_item(&item);
        assert!((row.price - 333.33).abs() < 1e-9);
        assert_eq!(row.into_item().unit_price_cents, 33_333);
    }
}
