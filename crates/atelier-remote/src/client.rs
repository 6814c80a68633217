//! # Generic Table Client
//!
//! Typed read/insert/update/delete operations over named remote collections,
//! wrapping the platform's PostgREST-style `/rest/v1/{table}` endpoints with
//! [`reqwest`].
//!
//! ## Query Surface
//! The storefront only ever needs equality filters and a single ordering,
//! so that is all this client exposes:
//! ```text
//! GET /rest/v1/products?collection_slug=eq.wrought&order=created_at.desc
//! ```
//! Richer querying stays on the hosted platform where it belongs.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::RemoteConfig;
use crate::error::{RemoteError, RemoteResult};

// =============================================================================
// Query Building Blocks
// =============================================================================

/// An equality filter on one column.
#[derive(Debug, Clone)]
pub struct Filter {
    column: String,
    value: String,
}

impl Filter {
    /// `column = value`
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Filter {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Renders as a query pair, e.g. `("slug", "eq.atlas-armchair")`.
    fn as_query_pair(&self) -> (String, String) {
        (self.column.clone(), format!("eq.{}", self.value))
    }
}

/// Ordering on one column.
#[derive(Debug, Clone)]
pub struct OrderBy {
    column: String,
    ascending: bool,
}

impl OrderBy {
    /// Ascending order on `column`.
    pub fn asc(column: impl Into<String>) -> Self {
        OrderBy {
            column: column.into(),
            ascending: true,
        }
    }

    /// Descending order on `column`.
    pub fn desc(column: impl Into<String>) -> Self {
        OrderBy {
            column: column.into(),
            ascending: false,
        }
    }

    /// Renders as a query pair, e.g. `("order", "created_at.desc")`.
    fn as_query_pair(&self) -> (String, String) {
        let direction = if self.ascending { "asc" } else { "desc" };
        ("order".to_string(), format!("{}.{}", self.column, direction))
    }
}

// =============================================================================
// Remote Client
// =============================================================================

/// HTTP client for the platform's tabular REST API.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RemoteClient {
    /// Creates a client with its own connection pool.
    pub fn new(config: &RemoteConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across collaborators).
    pub fn with_client(http: reqwest::Client, config: &RemoteConfig) -> Self {
        RemoteClient {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Attaches the platform auth headers to a request.
    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Builds the query string pairs for a read.
    fn select_query(
        filters: &[Filter],
        order: Option<&OrderBy>,
        limit: Option<u32>,
    ) -> Vec<(String, String)> {
        let mut query: Vec<(String, String)> = vec![("select".to_string(), "*".to_string())];
        query.extend(filters.iter().map(Filter::as_query_pair));
        if let Some(order) = order {
            query.push(order.as_query_pair());
        }
        if let Some(limit) = limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        query
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(String, String)],
    ) -> RemoteResult<Vec<T>> {
        let response = self
            .authed(self.http.get(self.table_url(table)).query(query))
            .send()
            .await?;

        let body = Self::check_status(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Selects all rows matching the filters, optionally ordered.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<OrderBy>,
    ) -> RemoteResult<Vec<T>> {
        debug!(table = %table, filters = filters.len(), "remote select");

        let query = Self::select_query(filters, order.as_ref(), None);
        self.fetch_rows(table, &query).await
    }

    /// Selects at most one row matching the filters, asking the platform
    /// for a single row rather than fetching every match.
    ///
    /// Returns `None` when nothing matches - callers decide whether that is
    /// an error for their lookup.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[Filter],
    ) -> RemoteResult<Option<T>> {
        debug!(table = %table, filters = filters.len(), "remote select one");

        let query = Self::select_query(filters, None, Some(1));
        let mut rows: Vec<T> = self.fetch_rows(table, &query).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.swap_remove(0)))
        }
    }

    /// Inserts one row and returns the stored representation, so callers see
    /// platform-assigned defaults (id, created_at, status).
    pub async fn insert<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        body: &B,
    ) -> RemoteResult<T> {
        debug!(table = %table, "remote insert");

        let response = self
            .authed(
                self.http
                    .post(self.table_url(table))
                    .header("Prefer", "return=representation")
                    .json(body),
            )
            .send()
            .await?;

        let body = Self::check_status(response).await?;
        // Representation comes back as a one-element array
        let mut rows: Vec<T> = serde_json::from_str(&body)?;
        rows.pop().ok_or(RemoteError::Api {
            status: 200,
            body: "insert returned no representation".to_string(),
        })
    }

    /// Updates the row with the given id.
    pub async fn update<B: Serialize>(&self, table: &str, id: &str, body: &B) -> RemoteResult<()> {
        debug!(table = %table, id = %id, "remote update");

        let response = self
            .authed(
                self.http
                    .patch(self.table_url(table))
                    .query(&[("id", format!("eq.{}", id))])
                    .json(body),
            )
            .send()
            .await?;

        Self::check_status(response).await.map(|_| ())
    }

    /// Deletes the row with the given id.
    pub async fn delete(&self, table: &str, id: &str) -> RemoteResult<()> {
        debug!(table = %table, id = %id, "remote delete");

        let response = self
            .authed(
                self.http
                    .delete(self.table_url(table))
                    .query(&[("id", format!("eq.{}", id))]),
            )
            .send()
            .await?;

        Self::check_status(response).await.map(|_| ())
    }

    /// Maps a non-2xx response to [`RemoteError::Api`], otherwise returns
    /// the response body.
    pub(crate) async fn check_status(response: reqwest::Response) -> RemoteResult<String> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            Ok(body)
        } else {
            Err(RemoteError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
