//! # Inquiry Repository
//!
//! Contact-form submissions against the remote `inquiries` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use atelier_core::{CheckoutForm, Inquiry};

use crate::client::{OrderBy, RemoteClient};
use crate::error::RemoteResult;

const TABLE: &str = "inquiries";

/// An inquiry row as stored remotely.
#[derive(Debug, Clone, Deserialize)]
pub struct InquiryRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl InquiryRow {
    pub fn into_inquiry(self) -> Inquiry {
        Inquiry {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            subject: self.subject,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

/// Insert payload for a contact-form submission.
///
/// The platform assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

impl NewInquiry {
    /// Builds a payload, normalizing empty optional fields to `None`.
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        subject: Option<String>,
        message: String,
    ) -> Self {
        NewInquiry {
            name,
            email,
            phone: CheckoutForm::normalize_optional(&phone),
            subject: CheckoutForm::normalize_optional(&subject),
            message,
        }
    }
}

/// Repository for contact-form submissions.
#[derive(Debug, Clone)]
pub struct InquiryRepository {
    client: RemoteClient,
}

impl InquiryRepository {
    /// Creates a new InquiryRepository.
    pub fn new(client: RemoteClient) -> Self {
        InquiryRepository { client }
    }

    /// Records a new inquiry and returns the persisted row.
    pub async fn submit(&self, inquiry: &NewInquiry) -> RemoteResult<Inquiry> {
        let saved: InquiryRow = self.client.insert(TABLE, inquiry).await?;
        debug!(inquiry_id = %saved.id, "Inquiry recorded");
        Ok(saved.into_inquiry())
    }

    /// Lists all inquiries, newest first (admin dashboard).
    pub async fn list(&self) -> RemoteResult<Vec<Inquiry>> {
        let rows: Vec<InquiryRow> = self
            .client
            .select(TABLE, &[], Some(OrderBy::desc("created_at")))
            .await?;
        Ok(rows.into_iter().map(InquiryRow::into_inquiry).collect())
    }

    /// Deletes a handled inquiry.
    pub async fn delete(&self, id: &str) -> RemoteResult<()> {
        self.client.delete(TABLE, id).await
    }
}
