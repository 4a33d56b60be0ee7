//! Page content fetching
//!
//! [`Fetcher`] is the network seam the navigator talks through;
//! [`HttpFetcher`] is the production implementation over reqwest.

use crate::error::{NavError, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Network collaborator that resolves a page identifier to raw content
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the content for a page identifier
    async fn fetch(&self, page: &str) -> Result<String>;
}

/// HTTP fetcher with a hard timeout bound
///
/// Page identifiers are resolved against the base URL, so relative
/// identifiers like `"about.html"` work as-is.
#[derive(Clone)]
pub struct HttpFetcher {
    http_client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher for the given base URL
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let http_client = Client::builder().build()?;

        Ok(Self {
            http_client,
            base_url,
            timeout,
        })
    }

    async fn fetch_text(&self, page: &str) -> Result<String> {
        let url = self.base_url.join(page)?;

        let response = self
            .http_client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NavError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    /// Fetch a page, aborting the request if it exceeds the timeout.
    ///
    /// The bound covers the whole exchange, connect through body read.
    async fn fetch(&self, page: &str) -> Result<String> {
        debug!("fetching page: {}", page);

        match tokio::time::timeout(self.timeout, self.fetch_text(page)).await {
            Ok(result) => result,
            Err(_) => Err(NavError::Timeout),
        }
    }
}
