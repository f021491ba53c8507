//! Connectivity self-check shared by the dashboard and the CLI.
//!
//! Runs the connection probe, the store-info fetch and a five-product catalog
//! read concurrently. Each check fails independently; failures are collected
//! as fixed messages in check order.

use chrono::{DateTime, Utc};
use headless_woo_core::{ConnectionTest, Product, StoreInfo};
use tracing::{info, instrument, warn};

use crate::transport::ApiError;
use crate::woocommerce::{ProductQuery, WooCommerce};
use crate::wordpress::WordPress;

/// Number of products sampled by the catalog check.
pub const SAMPLE_PRODUCT_COUNT: u32 = 5;

pub const CONNECTION_FAILED: &str = "WordPress connection failed";
pub const STORE_INFO_FAILED: &str = "Store info failed";
pub const PRODUCTS_FAILED: &str = "WooCommerce products failed";

/// Outcome of one diagnostic run.
#[derive(Debug)]
pub struct DiagnosticReport {
    pub connection: Result<ConnectionTest, ApiError>,
    pub store_info: Result<StoreInfo, ApiError>,
    pub products: Result<Vec<Product>, ApiError>,
    pub checked_at: DateTime<Utc>,
}

impl DiagnosticReport {
    /// Failure messages, in check order.
    #[must_use]
    pub fn errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if self.connection.is_err() {
            errors.push(CONNECTION_FAILED);
        }
        if self.store_info.is_err() {
            errors.push(STORE_INFO_FAILED);
        }
        if self.products.is_err() {
            errors.push(PRODUCTS_FAILED);
        }
        errors
    }

    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.connection.is_ok() && self.store_info.is_ok() && self.products.is_ok()
    }

    /// Sampled products, empty if the catalog check failed.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.products.as_deref().unwrap_or_default()
    }
}

/// Run all checks.
#[instrument(skip_all)]
pub async fn run_diagnostics(woocommerce: &WooCommerce, wordpress: &WordPress) -> DiagnosticReport {
    let query = ProductQuery::new().per_page(SAMPLE_PRODUCT_COUNT);

    let (connection, store_info, products) = tokio::join!(
        wordpress.test_connection(),
        wordpress.get_store_info(),
        woocommerce.get_products(&query),
    );

    let report = DiagnosticReport {
        connection,
        store_info,
        products,
        checked_at: Utc::now(),
    };

    if report.is_healthy() {
        info!("All connections successful");
    } else {
        warn!(errors = ?report.errors(), "Diagnostics found failures");
    }

    report
}
