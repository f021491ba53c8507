//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//! GET  /test                            - API test dashboard (HTML)
//!
//! # JSON proxy
//! GET  /api/products                    - Product listing (ProductQuery params)
//! GET  /api/products/search?q=&limit=   - Product search
//! GET  /api/products/featured?limit=    - Featured products
//! GET  /api/products/slug/{slug}        - Product by slug (404 if none)
//! GET  /api/products/{id}               - Product by ID
//! GET  /api/categories                  - Category listing
//! GET  /api/categories/{id}/products    - Products in a category
//! POST /api/orders                      - Create an order
//! GET  /api/store-info                  - Store metadata
//! GET  /api/connection                  - WordPress connection probe
//! GET  /api/testimonials                - Testimonial posts
//! GET  /api/faqs                        - FAQ posts
//! ```

pub mod api;
pub mod dashboard;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the JSON proxy router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(api::products))
        .route("/products/search", get(api::search))
        .route("/products/featured", get(api::featured))
        .route("/products/slug/{slug}", get(api::product_by_slug))
        .route("/products/{id}", get(api::product))
        .route("/categories", get(api::categories))
        .route("/categories/{id}/products", get(api::category_products))
        .route("/orders", post(api::create_order))
        .route("/store-info", get(api::store_info))
        .route("/connection", get(api::connection))
        .route("/testimonials", get(api::testimonials))
        .route("/faqs", get(api::faqs))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/test", get(dashboard::show))
        .nest("/api", api_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
