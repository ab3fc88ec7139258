//! Network transport
//!
//! The [`Fetch`] trait is the seam between the caching client and the wire.
//! [`HttpFetcher`] is the reqwest-backed implementation used by the binary.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::{ApiError, Result};

/// Retrieves the raw body behind a URL.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Returns the response body, or an error for transport failures and
    /// non-success statuses.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// HTTP transport over a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
