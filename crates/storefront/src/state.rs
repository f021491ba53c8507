//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::transport::{ApiError, CatalogClient, ContentClient, Transport};
use crate::woocommerce::WooCommerce;
use crate::wordpress::WordPress;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and both API accessors.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    woocommerce: WooCommerce,
    wordpress: WordPress,
}

impl AppState {
    /// Create application state with HTTP transports built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the WordPress URL is invalid or an HTTP client
    /// cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, ApiError> {
        let catalog: Arc<dyn Transport> = Arc::new(CatalogClient::new(&config.wordpress)?);
        let content: Arc<dyn Transport> = Arc::new(ContentClient::new(&config.wordpress)?);
        Ok(Self::with_transports(config, catalog, content))
    }

    /// Create application state over caller-supplied transports.
    #[must_use]
    pub fn with_transports(
        config: StorefrontConfig,
        catalog: Arc<dyn Transport>,
        content: Arc<dyn Transport>,
    ) -> Self {
        let woocommerce = WooCommerce::new(catalog, content.clone());
        let wordpress = WordPress::new(content);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                woocommerce,
                wordpress,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the WooCommerce catalog accessor.
    #[must_use]
    pub fn woocommerce(&self) -> &WooCommerce {
        &self.inner.woocommerce
    }

    /// Get a reference to the WordPress content accessor.
    #[must_use]
    pub fn wordpress(&self) -> &WordPress {
        &self.inner.wordpress
    }
}
