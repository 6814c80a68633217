//! Integration tests for the storefront HTTP surface.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router.
//! The test state points at the local emulator address with nothing
//! listening, so every request that would reach the remote platform fails
//! fast; cart mutations, validation guards, and upstream-failure handling
//! are all observable without a backend.

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

use atelier_core::Product;
use storefront::state::AppState;

fn test_app() -> Router {
    storefront::build_router(AppState::for_tests())
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Test: GET /cart starts empty with a formatted zero subtotal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cart_starts_empty() {
    let response = send(test_app(), Method::GET, "/cart", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["items"], serde_json::json!([]));
    assert_eq!(json["totals"]["totalQuantity"], 0);
    // Default display currency is GHS
    assert_eq!(json["displaySubtotal"], "GH₵0.00");
}

// ---------------------------------------------------------------------------
// Test: mutations on lines that are not in the cart are no-ops
// ---------------------------------------------------------------------------

#[tokio::test]
async fn removing_absent_line_is_a_noop() {
    let response = send(test_app(), Method::DELETE, "/cart/items/nope", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["totals"]["itemCount"], 0);
}

#[tokio::test]
async fn updating_absent_line_is_a_noop() {
    let response = send(
        test_app(),
        Method::PATCH,
        "/cart/items/nope",
        Some(r#"{"quantity": 5}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["totals"]["itemCount"], 0);
}

// ---------------------------------------------------------------------------
// Test: add with a non-positive quantity is rejected before any lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_item_rejects_zero_quantity() {
    let response = send(
        test_app(),
        Method::POST,
        "/cart/items",
        Some(r#"{"productId": "p-1", "quantity": 0}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: DELETE /cart empties the cart
// ---------------------------------------------------------------------------

#[tokio::test]
async fn clear_cart_returns_empty_cart() {
    let response = send(test_app(), Method::DELETE, "/cart", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["items"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Test: the currency toggle round-trips and affects cart formatting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn currency_toggle_round_trip() {
    let app = test_app();

    let response = send(app.clone(), Method::GET, "/currency", None).await;
    let json = body_json(response).await;
    assert_eq!(json["currency"], "GHS");

    let response = send(
        app.clone(),
        Method::PUT,
        "/currency",
        Some(r#"{"currency": "USD"}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["currency"], "USD");

    // The cart subtotal now formats in the base currency
    let response = send(app, Method::GET, "/cart", None).await;
    let json = body_json(response).await;
    assert_eq!(json["displaySubtotal"], "$0.00");
}

#[tokio::test]
async fn currency_rejects_unknown_code() {
    let response = send(
        test_app(),
        Method::PUT,
        "/currency",
        Some(r#"{"currency": "EUR"}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Test: checkout with an empty cart is rejected with EMPTY_CART
// ---------------------------------------------------------------------------

#[tokio::test]
async fn checkout_empty_cart_is_rejected() {
    let response = send(
        test_app(),
        Method::POST,
        "/checkout",
        Some(r#"{"name": "Ama Mensah", "email": "ama@example.com", "phone": null, "address": null, "notes": null}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "EMPTY_CART");
}

// ---------------------------------------------------------------------------
// Test: a failed checkout leaves the cart untouched
// ---------------------------------------------------------------------------

fn seeded_product() -> Product {
    Product {
        id: "p-1".to_string(),
        slug: "atlas-armchair".to_string(),
        name: "Atlas Armchair".to_string(),
        collection: "Wrought".to_string(),
        collection_slug: "wrought".to_string(),
        category: "Seating".to_string(),
        category_slug: "seating".to_string(),
        price_cents: 24_900,
        exchange_rate_scaled: 150_000,
        description: "Hand-forged armchair".to_string(),
        long_description: String::new(),
        material: None,
        color: None,
        dimensions: None,
        weight: None,
        finish: None,
        images: Vec::new(),
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

#[tokio::test]
async fn failed_checkout_leaves_cart_unchanged() {
    let state = AppState::for_tests();
    let app = storefront::build_router(state.clone());

    // Seed the shared cart directly; nothing listens on the emulator
    // address, so order submission is guaranteed to fail.
    let product = seeded_product();
    state.cart.with_cart_mut(|cart| cart.add_item(&product, 2));

    let response = send(
        app.clone(),
        Method::POST,
        "/checkout",
        Some(r#"{"name": "Ama Mensah", "email": "ama@example.com", "phone": null, "address": null, "notes": null}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_ERROR");

    // The cart still holds the seeded line for a retry
    let response = send(app, Method::GET, "/cart", None).await;
    let json = body_json(response).await;
    assert_eq!(json["totals"]["totalQuantity"], 2);
    assert_eq!(json["totals"]["subtotalCents"], 49_800);
}

// ---------------------------------------------------------------------------
// Test: unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = send(test_app(), Method::GET, "/this-route-does-not-exist", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
