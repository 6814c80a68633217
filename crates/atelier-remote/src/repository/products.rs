//! # Product Repository
//!
//! Catalog operations against the remote `products` collection.
//!
//! ## Key Operations
//! - Storefront reads: full list, featured set, by collection, by slug pair
//! - Admin writes: insert, update, delete

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use atelier_core::{ExchangeRate, Money, Product, DEFAULT_EXCHANGE_RATE};

use crate::client::{Filter, OrderBy, RemoteClient};
use crate::error::{RemoteError, RemoteResult};

const TABLE: &str = "products";

// =============================================================================
// Row Types
// =============================================================================

/// A `products` row exactly as the platform returns it.
///
/// Prices and exchange rates are decimal columns remotely; conversion to the
/// integer forms happens in [`ProductRow::into_product`] and nowhere else.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRow {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub collection: String,
    pub collection_slug: String,
    pub category: String,
    pub category_slug: String,
    /// Decimal base-currency price.
    pub price: f64,
    /// Decimal USD→GHS rate; legacy rows predate the column.
    pub exchange_rate: Option<f64>,
    pub description: String,
    pub long_description: String,
    pub material: Option<String>,
    pub color: Option<String>,
    pub dimensions: Option<String>,
    pub weight: Option<String>,
    pub finish: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub product_details: Option<String>,
    pub shipping_info: Option<String>,
    pub returns_info: Option<String>,
    pub homepage_title: Option<String>,
    pub homepage_subtitle: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductRow {
    /// Converts the row into the domain type, quantizing money to cents.
    pub fn into_product(self) -> Product {
        let rate = self.exchange_rate.unwrap_or(DEFAULT_EXCHANGE_RATE);
        Product {
            id: self.id,
            slug: self.slug,
            name: self.name,
            collection: self.collection,
            collection_slug: self.collection_slug,
            category: self.category,
            category_slug: self.category_slug,
            price_cents: Money::from_dollars(self.price).cents(),
            exchange_rate_scaled: ExchangeRate::from_rate(rate).scaled(),
            description: self.description,
            long_description: self.long_description,
            material: self.material,
            color: self.color,
            dimensions: self.dimensions,
            weight: self.weight,
            finish: self.finish,
            images: self.images,
            featured: self.featured,
            product_details: self.product_details,
            shipping_info: self.shipping_info,
            returns_info: self.returns_info,
            homepage_title: self.homepage_title,
            homepage_subtitle: self.homepage_subtitle,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Writable product fields for admin insert/update.
///
/// The platform assigns `id` and timestamps; everything else is explicit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductWrite {
    pub slug: String,
    pub name: String,
    pub collection: String,
    pub collection_slug: String,
    pub category: String,
    pub category_slug: String,
    /// Decimal base-currency price (remote column shape).
    pub price: f64,
    /// Decimal USD→GHS rate.
    pub exchange_rate: f64,
    pub description: String,
    pub long_description: String,
    pub material: Option<String>,
    pub color: Option<String>,
    pub dimensions: Option<String>,
    pub weight: Option<String>,
    pub finish: Option<String>,
    pub images: Vec<String>,
    pub featured: bool,
    pub product_details: Option<String>,
    pub shipping_info: Option<String>,
    pub returns_info: Option<String>,
    pub homepage_title: Option<String>,
    pub homepage_subtitle: Option<String>,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for catalog operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = remote.products();
/// let all = repo.list().await?;
/// let product = repo.get_by_slugs("wrought", "seating").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    client: RemoteClient,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(client: RemoteClient) -> Self {
        ProductRepository { client }
    }

    /// Lists the full catalog, newest first.
    pub async fn list(&self) -> RemoteResult<Vec<Product>> {
        let rows: Vec<ProductRow> = self
            .client
            .select(TABLE, &[], Some(OrderBy::desc("created_at")))
            .await?;

        debug!(count = rows.len(), "Fetched product catalog");
        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    /// Lists featured products for the home page hero slider.
    pub async fn featured(&self) -> RemoteResult<Vec<Product>> {
        let rows: Vec<ProductRow> = self
            .client
            .select(
                TABLE,
                &[Filter::eq("featured", "true")],
                Some(OrderBy::desc("created_at")),
            )
            .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    /// Lists products in a collection, oldest first (stable display order).
    pub async fn by_collection(&self, collection_slug: &str) -> RemoteResult<Vec<Product>> {
        let rows: Vec<ProductRow> = self
            .client
            .select(
                TABLE,
                &[Filter::eq("collection_slug", collection_slug)],
                Some(OrderBy::asc("created_at")),
            )
            .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    /// Looks up one product by its collection/category slug pair (the
    /// product page URL shape). `None` when no row matches.
    pub async fn get_by_slugs(
        &self,
        collection_slug: &str,
        category_slug: &str,
    ) -> RemoteResult<Option<Product>> {
        let row: Option<ProductRow> = self
            .client
            .select_one(
                TABLE,
                &[
                    Filter::eq("collection_slug", collection_slug),
                    Filter::eq("category_slug", category_slug),
                ],
            )
            .await?;

        Ok(row.map(ProductRow::into_product))
    }

    /// Looks up one product by id (used when adding to the cart).
    pub async fn get_by_id(&self, id: &str) -> RemoteResult<Option<Product>> {
        let row: Option<ProductRow> = self
            .client
            .select_one(TABLE, &[Filter::eq("id", id)])
            .await?;

        Ok(row.map(ProductRow::into_product))
    }

    /// Inserts a new product (admin form).
    pub async fn insert(&self, product: &ProductWrite) -> RemoteResult<Product> {
        let row: ProductRow = self.client.insert(TABLE, product).await?;
        debug!(id = %row.id, slug = %row.slug, "Product created");
        Ok(row.into_product())
    }

    /// Updates an existing product (admin form).
    pub async fn update(&self, id: &str, product: &ProductWrite) -> RemoteResult<()> {
        self.client.update(TABLE, id, product).await
    }

    /// Deletes a product.
    pub async fn delete(&self, id: &str) -> RemoteResult<()> {
        self.client.delete(TABLE, id).await
    }

    /// Like [`Self::get_by_id`] but treats absence as an error, for call
    /// sites that require the product to exist.
    pub async fn require(&self, id: &str) -> RemoteResult<Product> {
        self.get_by_id(id).await?.ok_or_else(|| RemoteError::NotFound {
            entity: "Product".to_string(),
            id: id.to_string(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
