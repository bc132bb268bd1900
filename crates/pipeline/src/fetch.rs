//! Reference-link fetcher.
//!
//! A thin trait over HTTP GET so the dispatcher can be exercised in tests
//! with canned bodies. The production implementation uses `reqwest` with a
//! configurable timeout and user agent. No retries, no caching.

use async_trait::async_trait;
use blogforge_config::FetcherConfig;
use blogforge_core::error::FetchError;
use std::time::Duration;

/// Fetches the body of a URL as text.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// The production fetcher.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status_code: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
