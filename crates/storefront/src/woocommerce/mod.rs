//! Catalog accessor: products, categories and checkout.
//!
//! Thin pass-throughs to the WooCommerce REST API that reshape responses into
//! the core data model. Every failure is logged here and handed back to the
//! caller unchanged, with two exceptions:
//!
//! - [`WooCommerce::get_product_by_slug`] reports "no match" as `Ok(None)`
//! - [`WooCommerce::get_featured_products`] falls back to the catalog when the
//!   custom featured endpoint fails
//!
//! # Example
//!
//! ```rust,ignore
//! use headless_woo_storefront::woocommerce::{ProductQuery, WooCommerce};
//!
//! let woo = WooCommerce::new(catalog, content);
//!
//! let page = woo.get_products(&ProductQuery::new().per_page(5)).await?;
//! let shirt = woo.get_product_by_slug("linen-shirt").await?;
//! ```

mod featured;
mod query;

pub use featured::FeaturedProducts;
pub use query::{CategoryQuery, PageOptions, ProductQuery, SortOrder};

use std::sync::Arc;

use headless_woo_core::{Category, CategoryId, CreatedOrder, NewOrder, Product, ProductId};
use serde::de::DeserializeOwned;
use tracing::{error, instrument, warn};

use crate::transport::{ApiError, Transport};

/// Default number of featured products.
pub const DEFAULT_FEATURED_LIMIT: u32 = 8;

/// Default page size for searches.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

const PRODUCTS_PATH: &str = "products";
const CATEGORIES_PATH: &str = "products/categories";
const ORDERS_PATH: &str = "orders";
const FEATURED_PRODUCTS_PATH: &str = "headless/v1/featured-products";

/// Typed access to the WooCommerce catalog.
///
/// Holds the catalog transport and, for the featured-products endpoint, the
/// content transport. Cheap to clone.
#[derive(Clone)]
pub struct WooCommerce {
    catalog: Arc<dyn Transport>,
    content: Arc<dyn Transport>,
}

impl WooCommerce {
    /// Create a catalog accessor over the given transports.
    #[must_use]
    pub fn new(catalog: Arc<dyn Transport>, content: Arc<dyn Transport>) -> Self {
        Self { catalog, content }
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// List products matching `query`, in server order.
    ///
    /// Returns a single page; callers page manually with `page`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
        fetch(self.catalog.as_ref(), PRODUCTS_PATH, &query.to_query_pairs())
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching products"))
    }

    /// Get a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        fetch(self.catalog.as_ref(), &format!("{PRODUCTS_PATH}/{id}"), &[])
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching product"))
    }

    /// Get a product by its slug.
    ///
    /// Returns `Ok(None)` when no product has this slug, so "not found" is
    /// distinguishable from a failed request.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>, ApiError> {
        let query = ProductQuery::new().slug(slug);
        let products: Vec<Product> =
            fetch(self.catalog.as_ref(), PRODUCTS_PATH, &query.to_query_pairs())
                .await
                .inspect_err(|e| error!(error = %e, "Error fetching product by slug"))?;

        Ok(products.into_iter().next())
    }

    /// Search products by free text.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn search_products(
        &self,
        search: &str,
        limit: u32,
    ) -> Result<Vec<Product>, ApiError> {
        let query = ProductQuery::new().search(search).per_page(limit);
        fetch(self.catalog.as_ref(), PRODUCTS_PATH, &query.to_query_pairs())
            .await
            .inspect_err(|e| error!(error = %e, "Error searching products"))
    }

    /// List products in a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(category_id = %category))]
    pub async fn get_products_by_category(
        &self,
        category: CategoryId,
        page: PageOptions,
    ) -> Result<Vec<Product>, ApiError> {
        let query = ProductQuery {
            category: Some(category),
            per_page: page.per_page,
            page: page.page,
            ..ProductQuery::default()
        };
        fetch(self.catalog.as_ref(), PRODUCTS_PATH, &query.to_query_pairs())
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching products by category"))
    }

    // =========================================================================
    // Featured Products
    // =========================================================================

    /// Get up to `limit` featured products.
    ///
    /// See [`Self::get_featured_products_detailed`] for which source answered.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::FallbackExhausted`] only if both the featured
    /// endpoint and the catalog fallback fail.
    pub async fn get_featured_products(&self, limit: u32) -> Result<Vec<Product>, ApiError> {
        self.get_featured_products_detailed(limit)
            .await
            .map(FeaturedProducts::into_products)
    }

    /// Get up to `limit` featured products, reporting which stage answered.
    ///
    /// Tries the `headless/v1/featured-products` endpoint and truncates its
    /// result to `limit`. On any failure there, queries the catalog with
    /// `featured=true&per_page={limit}`. The two requests run strictly one
    /// after the other.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::FallbackExhausted`] if both stages fail.
    #[instrument(skip(self))]
    pub async fn get_featured_products_detailed(
        &self,
        limit: u32,
    ) -> Result<FeaturedProducts, ApiError> {
        let primary_error =
            match fetch::<Vec<Product>>(self.content.as_ref(), FEATURED_PRODUCTS_PATH, &[]).await {
                Ok(mut products) => {
                    products.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
                    return Ok(FeaturedProducts::Primary(products));
                }
                Err(e) => e,
            };

        warn!(
            error = %primary_error,
            "Error fetching featured products, falling back to catalog"
        );

        let query = ProductQuery::new().featured(true).per_page(limit);
        match self.get_products(&query).await {
            Ok(products) => Ok(FeaturedProducts::Fallback {
                primary_error,
                products,
            }),
            Err(fallback) => Err(ApiError::FallbackExhausted {
                primary: Box::new(primary_error),
                fallback: Box::new(fallback),
            }),
        }
    }

    // =========================================================================
    // Category Methods
    // =========================================================================

    /// List product categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_categories(&self, query: &CategoryQuery) -> Result<Vec<Category>, ApiError> {
        fetch(self.catalog.as_ref(), CATEGORIES_PATH, &query.to_query_pairs())
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching categories"))
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Create an order.
    ///
    /// Not idempotent: every call creates a new remote order.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or WooCommerce rejects the
    /// order.
    #[instrument(skip(self, order), fields(line_items = order.line_items.len()))]
    pub async fn create_order(&self, order: &NewOrder) -> Result<CreatedOrder, ApiError> {
        let body = serde_json::to_value(order)?;
        let created: CreatedOrder = self
            .catalog
            .post(ORDERS_PATH, &body)
            .await
            .and_then(|value| serde_json::from_value(value).map_err(ApiError::from))
            .inspect_err(|e| error!(error = %e, "Error creating order"))?;

        tracing::info!(order_id = %created.id, "Order created");
        Ok(created)
    }
}

/// GET `path` and decode the body.
async fn fetch<T: DeserializeOwned>(
    transport: &dyn Transport,
    path: &str,
    query: &[(String, String)],
) -> Result<T, ApiError> {
    let value = transport.get(path, query).await?;
    Ok(serde_json::from_value(value)?)
}
