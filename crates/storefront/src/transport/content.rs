//! WordPress REST client for custom endpoints (`/wp-json`).

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{ApiError, Transport, read_json, resolve};
use crate::config::WordPressConfig;

/// Unauthenticated client for WordPress content and `headless/v1` endpoints.
#[derive(Clone)]
pub struct ContentClient {
    inner: Arc<ContentClientInner>,
}

struct ContentClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ContentClient {
    /// Create a new content client rooted at `{site_url}/wp-json/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the site URL is invalid or the HTTP client fails
    /// to build.
    pub fn new(config: &WordPressConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&format!(
            "{}/wp-json/",
            config.site_url.trim_end_matches('/')
        ))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(ContentClientInner { client, base_url }),
        })
    }

    /// Base URL all content paths are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }
}

#[async_trait]
impl Transport for ContentClient {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        let url = resolve(&self.inner.base_url, path, query)?;
        debug!(url = %url, "GET content");
        let response = self.inner.client.get(url).send().await?;
        read_json(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = resolve(&self.inner.base_url, path, &[])?;
        debug!(url = %url, "POST content");
        let response = self.inner.client.post(url).json(body).send().await?;
        read_json(response).await
    }
}
