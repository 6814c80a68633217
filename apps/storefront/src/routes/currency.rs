//! # Currency Routes
//!
//! The GHS/USD display-currency toggle. Switching affects every formatted
//! price the API returns from that point on; stored cents never change.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use atelier_core::Currency;

use crate::state::AppState;

/// Builds the currency sub-router.
pub fn router() -> Router<AppState> {
    Router::new().route("/currency", get(get_currency).put(set_currency))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyResponse {
    pub currency: Currency,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCurrencyRequest {
    pub currency: Currency,
}

/// Currently selected display currency.
async fn get_currency(State(state): State<AppState>) -> Json<CurrencyResponse> {
    Json(CurrencyResponse {
        currency: state.currency.get(),
    })
}

/// Switches the display currency.
async fn set_currency(
    State(state): State<AppState>,
    Json(request): Json<SetCurrencyRequest>,
) -> Json<CurrencyResponse> {
    debug!(currency = %request.currency, "Switching display currency");
    state.currency.set(request.currency);

    Json(CurrencyResponse {
        currency: state.currency.get(),
    })
}
