//! # Mailer
//!
//! Order-confirmation e-mail via the platform's serverless function.
//!
//! ## Fire-and-Forget
//! ```text
//! submit_checkout ──► order saved ──► Mailer::dispatch (spawned task)
//!                          │                    │
//!                          ▼                    ▼
//!                  response to customer   success: debug log
//!                  (never waits on mail)  failure: warn log, order stands
//! ```
//! The order is already persisted by the time mail is attempted, so a mail
//! failure must never surface to the customer.

use serde::Serialize;
use tracing::{debug, warn};

use atelier_core::{Money, Order};

use crate::client::RemoteClient;
use crate::config::RemoteConfig;
use crate::error::RemoteResult;

const FUNCTION: &str = "send-order-confirmation";

// =============================================================================
// Payload
// =============================================================================

/// One line of the e-mail's item table.
#[derive(Debug, Clone, Serialize)]
pub struct EmailItem {
    pub name: String,
    /// Unit price as decimal dollars (the function formats it).
    pub price: f64,
    pub quantity: i64,
}

/// Payload for the confirmation function, camelCase per its contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationEmail {
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<EmailItem>,
    /// Order total as decimal dollars.
    pub total_price: f64,
}

impl ConfirmationEmail {
    /// Builds the payload from a persisted order.
    pub fn from_order(order: &Order) -> Self {
        ConfirmationEmail {
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            items: order
                .items
                .iter()
                .map(|item| EmailItem {
                    name: item.name.clone(),
                    price: Money::from_cents(item.unit_price_cents).dollars_f64(),
                    quantity: item.quantity,
                })
                .collect(),
            total_price: Money::from_cents(order.total_price_cents).dollars_f64(),
        }
    }
}

// =============================================================================
// Mailer
// =============================================================================

/// Client for the order-confirmation function.
#[derive(Debug, Clone)]
pub struct Mailer {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Mailer {
    /// Creates a Mailer with its own connection pool.
    pub fn new(config: &RemoteConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates a Mailer sharing an existing connection pool.
    pub fn with_client(http: reqwest::Client, config: &RemoteConfig) -> Self {
        Mailer {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Sends the confirmation e-mail, returning the function's verdict.
    pub async fn send(&self, email: &ConfirmationEmail) -> RemoteResult<()> {
        let url = format!("{}/functions/v1/{}", self.base_url, FUNCTION);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        RemoteClient::check_status(response).await?;
        debug!(customer = %email.customer_email, "Confirmation e-mail sent");
        Ok(())
    }

    /// Dispatches the e-mail on a background task.
    ///
    /// Failures are logged and swallowed; the caller's checkout response
    /// never depends on mail delivery.
    pub fn dispatch(&self, order: &Order) {
        let mailer = self.clone();
        let email = ConfirmationEmail::from_order(order);
        let order_id = order.id.clone();

        tokio::spawn(async move {
            if let Err(error) = mailer.send(&email).await {
                warn!(
                    order_id = %order_id,
                    customer = %email.customer_email,
                    %error,
                    "Confirmation e-mail failed, order unaffected"
                );
            }
        });
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
