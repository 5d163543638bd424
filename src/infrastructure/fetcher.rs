//! Remote specification retrieval

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("error fetching URL: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to fetch spec: HTTP {0}")]
    Status(u16),

    #[error("URL does not appear to return JSON or YAML content")]
    UnsupportedContentType,
}

/// Fetches specification text from a remote URL with a bounded timeout.
#[derive(Clone)]
pub struct SpecFetcher {
    client: Client,
}

impl SpecFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
            error!(error = %e, "Failed to build HTTP client with custom timeout, using default client");
            Client::new()
        });
        Self { client }
    }

    /// Retrieve the body at `url`, requiring a 200 status and a content type
    /// that plausibly carries a spec (JSON, YAML, or plain text).
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "Fetching specification");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_lowercase();
        if !is_spec_content_type(&content_type) {
            return Err(FetchError::UnsupportedContentType);
        }

        Ok(response.text().await?)
    }
}

fn is_spec_content_type(content_type: &str) -> bool {
    content_type.contains("json") || content_type.contains("yaml") || content_type.contains("text")
}
