//! # Storage Client
//!
//! Object-storage uploads for product and article images.
//!
//! ## Endpoints
//! ```text
//! POST {base}/storage/v1/object/{bucket}/{path}          upload
//!      {base}/storage/v1/object/public/{bucket}/{path}   public URL
//! ```
//! Buckets are public-read, so derived URLs need no signing.

use tracing::debug;

use crate::client::RemoteClient;
use crate::config::RemoteConfig;
use crate::error::RemoteResult;

/// Client for the platform's object-storage surface.
#[derive(Debug, Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    bucket: String,
}

impl StorageClient {
    /// Creates a StorageClient with its own connection pool.
    pub fn new(config: &RemoteConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates a StorageClient sharing an existing connection pool.
    pub fn with_client(http: reqwest::Client, config: &RemoteConfig) -> Self {
        StorageClient {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            bucket: config.storage_bucket.clone(),
        }
    }

    /// Uploads an object and returns its public URL.
    ///
    /// `path` is the object key within the bucket, e.g.
    /// `products/atlas-armchair-1.jpg`.
    pub async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> RemoteResult<String> {
        debug!(bucket = %self.bucket, path = %path, size = bytes.len(), "storage upload");

        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, path
        );
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        RemoteClient::check_status(response).await?;
        Ok(self.public_url(path))
    }

    /// Derives the public URL of an object without touching the network.
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }
}
