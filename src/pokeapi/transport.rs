//! Upstream Transport
//!
//! HTTP access to the PokéAPI behind an object-safe trait, so the
//! fetchers can be exercised against canned payloads in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

// == Transport Trait ==
/// Read-only access to the upstream REST API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET for `path` (relative to the API base) and returns the
    /// decoded JSON body, or None for any non-success status.
    async fn get(&self, path: &str) -> Result<Option<Value>>;
}

// == HTTP Transport ==
/// Production transport over a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Option<Value>> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let body = response.json::<Value>().await?;
        Ok(Some(body))
    }
}
