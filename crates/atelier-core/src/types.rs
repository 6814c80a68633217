//! # Catalog & Content Types
//!
//! Core domain types for the storefront catalog and marketing content.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   Collection    │   │    Article      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  slug (business)│   │  slug           │   │  slug           │       │
//! │  │  price_cents    │   │  name           │   │  title          │       │
//! │  │  exchange_rate  │   │  description    │   │  body           │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Category     │   │    Inquiry      │                             │
//! │  │  slug, name     │   │  contact form   │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, used for remote-table relations
//! - Business ID: (slug) - human-readable, used in URLs, potentially mutable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::ExchangeRate;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalog item available for purchase.
///
/// Prices live in base-currency cents; `exchange_rate_scaled` is the
/// fixed-point USD→GHS rate captured when the product was priced (see
/// [`ExchangeRate`]).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// URL slug - business identifier.
    pub slug: String,

    /// Display name.
    pub name: String,

    /// Collection this product belongs to (display name).
    pub collection: String,

    /// Collection slug (used for routing and grouping).
    pub collection_slug: String,

    /// Category within the collection (display name).
    pub category: String,

    /// Category slug.
    pub category_slug: String,

    /// Price in base-currency cents.
    pub price_cents: i64,

    /// USD→GHS exchange rate, fixed-point scaled by 10,000.
    pub exchange_rate_scaled: u32,

    /// Short description for listing cards.
    pub description: String,

    /// Long-form description for the product page.
    pub long_description: String,

    /// Material specification, when provided.
    pub material: Option<String>,

    /// Colour specification.
    pub color: Option<String>,

    /// Physical dimensions.
    pub dimensions: Option<String>,

    /// Weight.
    pub weight: Option<String>,

    /// Surface finish.
    pub finish: Option<String>,

    /// Gallery image URLs, in display order. The first is the card image.
    pub images: Vec<String>,

    /// Whether the product is featured on the home page.
    pub featured: bool,

    /// Extra accordion copy for the product page.
    pub product_details: Option<String>,

    /// Shipping copy for the product page.
    pub shipping_info: Option<String>,

    /// Returns copy for the product page.
    pub returns_info: Option<String>,

    /// Hero slide title when featured on the home page.
    pub homepage_title: Option<String>,

    /// Hero slide subtitle.
    pub homepage_subtitle: Option<String>,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the captured exchange rate.
    #[inline]
    pub fn exchange_rate(&self) -> ExchangeRate {
        ExchangeRate::from_scaled(self.exchange_rate_scaled)
    }

    /// Returns the primary (card) image URL, if the gallery has any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

// =============================================================================
// Collection & Category
// =============================================================================

/// A furniture collection (e.g. a designer line) grouping products.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    /// Banner image shown on the collection page.
    pub image_url: Option<String>,
    /// Manual ordering on the collections index.
    pub sort_order: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// A product category within a collection (chairs, tables, ...).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub collection_slug: String,
    pub sort_order: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Article
// =============================================================================

/// A marketing/journal article.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Teaser shown on the articles index.
    pub excerpt: Option<String>,
    /// Full HTML body.
    pub body: String,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    #[ts(as = "Option<String>")]
    pub published_at: Option<DateTime<Utc>>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Inquiry
// =============================================================================

/// A contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
