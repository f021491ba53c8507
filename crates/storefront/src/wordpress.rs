//! Content accessor: connectivity probe, store metadata and custom post types.
//!
//! Talks to the unauthenticated `/wp-json` namespaces. The connection probe
//! and store info propagate failures; testimonial and FAQ listings are
//! decorative and degrade to an empty list instead.

use std::sync::Arc;

use headless_woo_core::{ConnectionTest, ContentRecord, StoreInfo};
use serde::de::DeserializeOwned;
use tracing::{error, instrument};

use crate::transport::{ApiError, Transport};

const CONNECTION_TEST_PATH: &str = "headless/v1/test";
const STORE_INFO_PATH: &str = "headless/v1/store-info";
const TESTIMONIALS_PATH: &str = "wp/v2/testimonial";
const FAQS_PATH: &str = "wp/v2/faq";

/// Typed access to WordPress content endpoints. Cheap to clone.
#[derive(Clone)]
pub struct WordPress {
    content: Arc<dyn Transport>,
}

impl WordPress {
    #[must_use]
    pub fn new(content: Arc<dyn Transport>) -> Self {
        Self { content }
    }

    /// Probe the headless plugin's diagnostic endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the site is unreachable or the plugin is missing.
    #[instrument(skip(self))]
    pub async fn test_connection(&self) -> Result<ConnectionTest, ApiError> {
        self.fetch(CONNECTION_TEST_PATH)
            .await
            .inspect_err(|e| error!(error = %e, "WordPress connection test failed"))
    }

    /// Fetch the store's general settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_store_info(&self) -> Result<StoreInfo, ApiError> {
        self.fetch(STORE_INFO_PATH)
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching store info"))
    }

    /// List testimonial posts. Empty on any failure.
    #[instrument(skip(self))]
    pub async fn get_testimonials(&self) -> Vec<ContentRecord> {
        self.fetch(TESTIMONIALS_PATH).await.unwrap_or_else(|e| {
            error!(error = %e, "Error fetching testimonials");
            Vec::new()
        })
    }

    /// List FAQ posts. Empty on any failure.
    #[instrument(skip(self))]
    pub async fn get_faqs(&self) -> Vec<ContentRecord> {
        self.fetch(FAQS_PATH).await.unwrap_or_else(|e| {
            error!(error = %e, "Error fetching FAQs");
            Vec::new()
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.content.get(path, &[]).await?;
        Ok(serde_json::from_value(value)?)
    }
}
