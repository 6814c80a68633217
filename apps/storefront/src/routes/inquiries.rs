//! # Inquiry Route
//!
//! The public contact form. Validation runs locally before anything is
//! sent to the platform.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use atelier_core::validation::{validate_customer_name, validate_email, validate_message};
use atelier_core::Inquiry;
use atelier_remote::repository::inquiries::NewInquiry;

use crate::error::ApiError;
use crate::state::AppState;

/// Builds the inquiries sub-router.
pub fn router() -> Router<AppState> {
    Router::new().route("/inquiries", post(submit_inquiry))
}

/// Body for `POST /inquiries`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

/// Records a contact-form submission.
async fn submit_inquiry(
    State(state): State<AppState>,
    Json(request): Json<InquiryRequest>,
) -> Result<(StatusCode, Json<Inquiry>), ApiError> {
    validate_customer_name(&request.name).map_err(atelier_core::CoreError::from)?;
    validate_email(&request.email).map_err(atelier_core::CoreError::from)?;
    validate_message(&request.message).map_err(atelier_core::CoreError::from)?;

    let inquiry = NewInquiry::new(
        request.name,
        request.email,
        request.phone,
        request.subject,
        request.message,
    );

    let saved = state.remote.inquiries().submit(&inquiry).await?;
    info!(inquiry_id = %saved.id, "Inquiry received");

    Ok((StatusCode::CREATED, Json(saved)))
}
