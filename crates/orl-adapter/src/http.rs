//! JSON-over-HTTP off-chain backend.
//!
//! Resolves `schema://host/path` by fetching `https://host/path` (the URL
//! scheme is configurable) and decoding the response body as a flat JSON
//! object. This is the IO boundary; no caching happens here — the pointer
//! core owns all caching.

use std::time::Duration;

use async_trait::async_trait;
use orl_types::{payload_from_json, Payload, Uri};
use tracing::debug;

use crate::error::{AdapterError, AdapterResult};
use crate::traits::OffChainAdapter;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP backend returning JSON object payloads.
pub struct HttpAdapter {
    client: reqwest::Client,
    url_scheme: String,
}

impl HttpAdapter {
    /// Create an adapter with the default 30s request timeout.
    pub fn new() -> AdapterResult<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create an adapter with an explicit request timeout.
    pub fn with_timeout(timeout: Duration) -> AdapterResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdapterError::Http(e.to_string()))?;
        Ok(Self {
            client,
            url_scheme: "https".to_string(),
        })
    }

    /// Override the URL scheme used to reach the backend (default `https`).
    pub fn with_url_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.url_scheme = scheme.into();
        self
    }

    /// The URL a given off-chain URI maps to.
    fn target_url(&self, uri: &Uri) -> String {
        format!("{}://{}", self.url_scheme, uri.rest())
    }
}

#[async_trait]
impl OffChainAdapter for HttpAdapter {
    async fn download(&self, uri: &Uri) -> AdapterResult<Payload> {
        let url = self.target_url(uri);
        debug!(%url, "fetching off-chain record over http");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AdapterError::Http(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AdapterError::NotFound {
                uri: uri.as_str().to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(AdapterError::Http(format!(
                "{} from {url}",
                response.status()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AdapterError::Http(e.to_string()))?;
        payload_from_json(body).map_err(|e| AdapterError::Malformed {
            uri: uri.as_str().to_string(),
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for HttpAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAdapter")
            .field("url_scheme", &self.url_scheme)
            .finish()
    }
}
