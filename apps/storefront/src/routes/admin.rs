//! # Admin Routes
//!
//! The dashboard surface: order tracking, inquiry review, catalog and
//! article management, image uploads.
//!
//! ## Order Stage Tracking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  confirmed ──► procurement ──► production ──► shipping ──► delivered    │
//! │                                                                         │
//! │  Any stage may be selected from the dashboard, including moving         │
//! │  backwards (a mis-click happens). A backwards move is accepted but      │
//! │  logged at warn level for the audit trail.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use atelier_core::validation::{
    validate_exchange_rate, validate_price_cents, validate_product_name, validate_slug,
};
use atelier_core::{Article, Inquiry, Money, Order, OrderStage, Product};
use atelier_remote::repository::content::ArticleWrite;
use atelier_remote::repository::products::ProductWrite;

use crate::error::ApiError;
use crate::state::AppState;

/// Builds the admin sub-router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/orders", get(list_orders))
        .route("/admin/orders/{id}", get(order_detail).delete(delete_order))
        .route("/admin/orders/{id}/stage", put(set_order_stage))
        .route("/admin/inquiries", get(list_inquiries))
        .route("/admin/inquiries/{id}", axum::routing::delete(delete_inquiry))
        .route("/admin/products", post(create_product))
        .route(
            "/admin/products/{id}",
            put(update_product).delete(delete_product),
        )
        .route("/admin/articles", post(create_article))
        .route(
            "/admin/articles/{id}",
            put(update_article).delete(delete_article),
        )
        .route("/admin/uploads", post(upload_image))
}

// =============================================================================
// Orders
// =============================================================================

/// All orders, newest first.
async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.remote.orders().list().await?))
}

/// One order with its full item breakdown.
async fn order_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.remote.orders().require(&id).await?))
}

/// Body for `PUT /admin/orders/{id}/stage`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStageRequest {
    pub stage: OrderStage,
}

/// Moves an order to a fulfillment stage.
async fn set_order_stage(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SetStageRequest>,
) -> Result<Json<Order>, ApiError> {
    let current = state.remote.orders().require(&id).await?;

    if current.status.is_regression_to(request.stage) {
        warn!(
            order_id = %id,
            from = %current.status,
            to = %request.stage,
            "Order stage moved backwards"
        );
    }

    state.remote.orders().set_stage(&id, request.stage).await?;
    info!(order_id = %id, stage = %request.stage, "Order stage set");

    let updated = state.remote.orders().require(&id).await?;
    Ok(Json(updated))
}

/// Deletes an order.
async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.remote.orders().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Inquiries
// =============================================================================

/// All inquiries, newest first.
async fn list_inquiries(State(state): State<AppState>) -> Result<Json<Vec<Inquiry>>, ApiError> {
    Ok(Json(state.remote.inquiries().list().await?))
}

/// Deletes a handled inquiry.
async fn delete_inquiry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.remote.inquiries().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Products
// =============================================================================

fn validate_product_write(product: &ProductWrite) -> Result<(), ApiError> {
    validate_product_name(&product.name).map_err(atelier_core::CoreError::from)?;
    validate_slug(&product.slug).map_err(atelier_core::CoreError::from)?;
    validate_slug(&product.collection_slug).map_err(atelier_core::CoreError::from)?;
    validate_slug(&product.category_slug).map_err(atelier_core::CoreError::from)?;
    validate_price_cents(Money::from_dollars(product.price).cents())
        .map_err(atelier_core::CoreError::from)?;
    validate_exchange_rate(product.exchange_rate).map_err(atelier_core::CoreError::from)?;
    Ok(())
}

/// Adds a product to the catalog.
async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<ProductWrite>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    validate_product_write(&product)?;

    let saved = state.remote.products().insert(&product).await?;
    info!(product_id = %saved.id, slug = %saved.slug, "Product created");

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Replaces a product's writable fields.
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(product): Json<ProductWrite>,
) -> Result<StatusCode, ApiError> {
    validate_product_write(&product)?;

    state.remote.products().update(&id, &product).await?;
    info!(product_id = %id, "Product updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Removes a product from the catalog.
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.remote.products().delete(&id).await?;
    info!(product_id = %id, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Articles
// =============================================================================

/// Publishes a journal article.
async fn create_article(
    State(state): State<AppState>,
    Json(article): Json<ArticleWrite>,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    validate_slug(&article.slug).map_err(atelier_core::CoreError::from)?;

    let saved = state.remote.content().insert_article(&article).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Updates an article.
async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(article): Json<ArticleWrite>,
) -> Result<StatusCode, ApiError> {
    validate_slug(&article.slug).map_err(atelier_core::CoreError::from)?;

    state.remote.content().update_article(&id, &article).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes an article.
async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.remote.content().delete_article(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Uploads
// =============================================================================

/// Query parameters for `POST /admin/uploads`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadParams {
    /// Object key within the bucket, e.g. `products/atlas-1.jpg`.
    pub path: String,
    /// MIME type of the body.
    pub content_type: String,
}

/// Response for a completed upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
}

/// Uploads an image and returns its public URL.
async fn upload_image(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    if body.is_empty() {
        return Err(ApiError::validation("upload body is empty"));
    }

    let url = state
        .remote
        .storage()
        .upload(&params.path, &params.content_type, body.to_vec())
        .await?;
    info!(path = %params.path, %url, "Image uploaded");

    Ok((StatusCode::CREATED, Json(UploadResponse { url })))
}

// =============================================================================
// Unit Tests
// =============================================================================
