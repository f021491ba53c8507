//! HTTP transports for the WooCommerce and WordPress REST APIs.
//!
//! # Architecture
//!
//! - [`Transport`] is the seam between accessors and the network: given a
//!   relative path and query parameters it returns the parsed JSON body
//! - [`CatalogClient`] talks to `wc/v3` with key/secret query-string auth
//! - [`ContentClient`] talks to the unauthenticated `/wp-json` namespaces
//! - No retry, no timeout override, no caching: one call, one request
//!
//! Both clients are built once at startup and shared behind `Arc`, the
//! underlying `reqwest::Client` pools connections.

mod catalog;
mod content;
#[cfg(test)]
mod scripted;

pub use catalog::CatalogClient;
pub use content::ContentClient;
#[cfg(test)]
pub use scripted::{RecordedRequest, ScriptedTransport};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Query-string parameters, in the order they are sent.
pub type QueryPairs = Vec<(String, String)>;

/// Maximum number of response-body characters kept in errors and logs.
const BODY_EXCERPT_LEN: usize = 500;

/// Errors that can occur when talking to the remote store.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never completed (DNS, connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request path could not be resolved against the base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Both the featured-products endpoint and the catalog fallback failed.
    #[error("Featured products unavailable: {fallback} (primary: {primary})")]
    FallbackExhausted {
        primary: Box<ApiError>,
        fallback: Box<ApiError>,
    },
}

impl ApiError {
    /// HTTP status returned by the server, if the request got that far.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::FallbackExhausted { fallback, .. } => fallback.status(),
            Self::Decode(_) | Self::InvalidUrl(_) => None,
        }
    }

    /// Whether the server reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// A request executor for one remote API.
///
/// Implementations resolve `path` against their own base URL, add whatever
/// authentication they need, and return the parsed JSON body. A failed call
/// yields exactly one error; retrying is the caller's business.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a `GET` request.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError>;

    /// Perform a `POST` request with a JSON body.
    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}

/// Join `path` onto `base` and append `query`.
fn resolve(base: &Url, path: &str, query: &[(String, String)]) -> Result<Url, ApiError> {
    let mut url = base.join(path.trim_start_matches('/'))?;
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    Ok(url)
}

/// Turn a response into parsed JSON, mapping non-success statuses to errors.
async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    let url = response.url().path().to_string();

    // Get response body as text first for better error diagnostics
    let response_text = response.text().await?;

    if !status.is_success() {
        tracing::warn!(
            status = %status,
            path = %url,
            body = %excerpt(&response_text),
            "WordPress API returned non-success status"
        );
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: excerpt(&response_text),
        });
    }

    serde_json::from_str(&response_text).map_err(|e| {
        tracing::warn!(
            error = %e,
            path = %url,
            body = %excerpt(&response_text),
            "Failed to parse WordPress API response"
        );
        ApiError::Decode(e)
    })
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_LEN).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 401,
            message: "woocommerce_rest_cannot_view".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 401 - woocommerce_rest_cannot_view");
        assert_eq!(err.status(), Some(401));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_fallback_exhausted_reports_fallback_status() {
        let err = ApiError::FallbackExhausted {
            primary: Box::new(ApiError::Status {
                status: 500,
                message: String::new(),
            }),
            fallback: Box::new(ApiError::Status {
                status: 404,
                message: "rest_no_route".to_string(),
            }),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("Featured products unavailable: API error: 404"));
    }

    #[test]
    fn test_resolve_joins_relative_paths() {
        let base = Url::parse("http://localhost:10033/wp-json/").unwrap();
        let url = resolve(&base, "/headless/v1/test", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:10033/wp-json/headless/v1/test");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_resolve_appends_query_in_order() {
        let base = Url::parse("https://shop.example.com/wp-json/wc/v3/").unwrap();
        let query = vec![
            ("per_page".to_string(), "5".to_string()),
            ("search".to_string(), "linen shirt".to_string()),
        ];
        let url = resolve(&base, "products", &query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://shop.example.com/wp-json/wc/v3/products?per_page=5&search=linen+shirt"
        );
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let body = "é".repeat(BODY_EXCERPT_LEN + 10);
        assert_eq!(excerpt(&body).chars().count(), BODY_EXCERPT_LEN);
    }
}
