//! # Catalog Routes
//!
//! Read-only storefront endpoints: products, collections, categories,
//! and journal articles.
//!
//! Responses carry the stored cents values plus a `displayPrice` string
//! formatted in the session currency, so the frontend never does money
//! math.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use atelier_core::{format_price, Article, Collection, Currency, Product};

use crate::error::ApiError;
use crate::state::AppState;

/// Builds the catalog sub-router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/featured", get(featured_products))
        .route("/collections", get(list_collections))
        .route("/collections/{collection_slug}/categories", get(list_categories))
        .route("/collections/{collection_slug}/products", get(products_in_collection))
        .route(
            "/collections/{collection_slug}/products/{category_slug}",
            get(product_detail),
        )
        .route("/articles", get(list_articles))
        .route("/articles/{slug}", get(article_detail))
}

// =============================================================================
// Response Types
// =============================================================================

/// A product enriched with its display price in the session currency.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    /// Formatted in the selected currency, e.g. "GH₵3,735.00" or "$249.00".
    pub display_price: String,
}

impl ProductView {
    fn new(product: Product, currency: Currency) -> Self {
        let display_price = format_price(product.price(), product.exchange_rate(), currency);
        ProductView {
            product,
            display_price,
        }
    }
}

fn to_views(products: Vec<Product>, currency: Currency) -> Vec<ProductView> {
    products
        .into_iter()
        .map(|product| ProductView::new(product, currency))
        .collect()
}

// =============================================================================
// Handlers
// =============================================================================

/// Full catalog, newest first.
async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductView>>, ApiError> {
    let products = state.remote.products().list().await?;
    Ok(Json(to_views(products, state.currency.get())))
}

/// Featured products for the home page slider.
async fn featured_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductView>>, ApiError> {
    let products = state.remote.products().featured().await?;
    Ok(Json(to_views(products, state.currency.get())))
}

/// All collections in display order.
async fn list_collections(
    State(state): State<AppState>,
) -> Result<Json<Vec<Collection>>, ApiError> {
    Ok(Json(state.remote.content().collections().await?))
}

/// Categories of one collection in display order.
async fn list_categories(
    State(state): State<AppState>,
    Path(collection_slug): Path<String>,
) -> Result<Json<Vec<atelier_core::Category>>, ApiError> {
    Ok(Json(state.remote.content().categories(&collection_slug).await?))
}

/// Products within a collection, oldest first.
async fn products_in_collection(
    State(state): State<AppState>,
    Path(collection_slug): Path<String>,
) -> Result<Json<Vec<ProductView>>, ApiError> {
    let products = state.remote.products().by_collection(&collection_slug).await?;
    Ok(Json(to_views(products, state.currency.get())))
}

/// One product addressed by its collection/category slug pair.
async fn product_detail(
    State(state): State<AppState>,
    Path((collection_slug, category_slug)): Path<(String, String)>,
) -> Result<Json<ProductView>, ApiError> {
    let product = state
        .remote
        .products()
        .get_by_slugs(&collection_slug, &category_slug)
        .await?
        .ok_or_else(|| {
            ApiError::not_found("Product", &format!("{}/{}", collection_slug, category_slug))
        })?;

    Ok(Json(ProductView::new(product, state.currency.get())))
}

/// All journal articles, newest first.
async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<Article>>, ApiError> {
    Ok(Json(state.remote.content().articles().await?))
}

/// One article by slug.
async fn article_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Article>, ApiError> {
    let article = state
        .remote
        .content()
        .article_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::not_found("Article", &slug))?;

    Ok(Json(article))
}
