//! Page fetching
//!
//! A plain GET with default client settings. The only failure in the whole
//! system that is recoverable at record granularity: callers log the error
//! and move on to the next record.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Why a page could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS failure, refused connection, invalid URL, unreadable body
    #[error("failed to fetch URL: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered, but not with 200
    #[error("non-OK HTTP status: {0}")]
    Status(StatusCode),
}

/// Retrieves the raw body of a target URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Production fetcher over a default-configured reqwest client. No timeout
/// override, no redirect-policy override, no TLS pinning.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        Ok(response.text().await?)
    }
}
