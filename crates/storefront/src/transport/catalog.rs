//! WooCommerce REST client (`/wp-json/wc/v3`).

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{ApiError, Transport, read_json, resolve};
use crate::config::WordPressConfig;

/// Pre-authenticated client for the WooCommerce catalog API.
///
/// Credentials travel as `consumer_key`/`consumer_secret` query parameters on
/// every request, which WooCommerce accepts over both HTTP and HTTPS.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    consumer_key: String,
    consumer_secret: SecretString,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// Missing credentials are accepted here; the server will reject each
    /// request instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the site URL is invalid or the HTTP client fails
    /// to build.
    pub fn new(config: &WordPressConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&format!(
            "{}/wp-json/{}/",
            config.site_url.trim_end_matches('/'),
            config.api_version.trim_matches('/')
        ))?;

        if !config.has_credentials() {
            tracing::warn!("WooCommerce consumer key/secret not set, catalog requests will fail");
        }

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                base_url,
                consumer_key: config.consumer_key.clone(),
                consumer_secret: config.consumer_secret.clone(),
            }),
        })
    }

    /// Base URL all catalog paths are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Resolve an endpoint and attach credentials.
    fn endpoint(&self, path: &str, query: &[(String, String)]) -> Result<Url, ApiError> {
        let mut url = resolve(&self.inner.base_url, path, query)?;
        url.query_pairs_mut()
            .append_pair("consumer_key", &self.inner.consumer_key)
            .append_pair(
                "consumer_secret",
                self.inner.consumer_secret.expose_secret(),
            );
        Ok(url)
    }
}

#[async_trait]
impl Transport for CatalogClient {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        let url = self.endpoint(path, query)?;
        // Never log the full URL: it carries the consumer secret.
        debug!(path, "GET catalog");
        let response = self.inner.client.get(url).send().await?;
        read_json(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.endpoint(path, &[])?;
        debug!(path, "POST catalog");
        let response = self.inner.client.post(url).json(body).send().await?;
        read_json(response).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(site_url: &str) -> WordPressConfig {
        WordPressConfig {
            site_url: site_url.to_string(),
            api_version: "wc/v3".to_string(),
            consumer_key: "ck_test".to_string(),
            consumer_secret: SecretString::from("cs_test"),
        }
    }

    #[test]
    fn test_base_url_targets_wc_v3() {
        let client = CatalogClient::new(&config("http://localhost:10033/")).unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "http://localhost:10033/wp-json/wc/v3/"
        );
    }

    #[test]
    fn test_endpoint_appends_credentials_after_filters() {
        let client = CatalogClient::new(&config("https://shop.example.com")).unwrap();
        let url = client
            .endpoint("products", &[("per_page".to_string(), "5".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://shop.example.com/wp-json/wc/v3/products?per_page=5&consumer_key=ck_test&consumer_secret=cs_test"
        );
    }

    #[test]
    fn test_endpoint_nested_path() {
        let client = CatalogClient::new(&config("https://shop.example.com")).unwrap();
        let url = client.endpoint("products/categories", &[]).unwrap();
        assert_eq!(url.path(), "/wp-json/wc/v3/products/categories");
    }

    #[test]
    fn test_invalid_site_url() {
        let result = CatalogClient::new(&config("not a url"));
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }
}
