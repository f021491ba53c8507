//! JSON proxy over the catalog and content accessors.
//!
//! Responses are the accessor results serialized as-is. Upstream failures
//! surface through [`AppError`].

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use headless_woo_core::{
    Category, CategoryId, ConnectionTest, ContentRecord, CreatedOrder, NewOrder, Product,
    ProductId, StoreInfo,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::woocommerce::{
    CategoryQuery, DEFAULT_FEATURED_LIMIT, DEFAULT_SEARCH_LIMIT, PageOptions, ProductQuery,
};

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<u32>,
}

/// Featured products query parameters.
#[derive(Debug, Deserialize)]
pub struct FeaturedParams {
    pub limit: Option<u32>,
}

/// List products.
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.woocommerce().get_products(&query).await?))
}

/// Get a product by ID.
#[instrument(skip(state))]
pub async fn product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    Ok(Json(state.woocommerce().get_product(id).await?))
}

/// Get a product by slug. 404 when no product matches.
#[instrument(skip(state))]
pub async fn product_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>> {
    state
        .woocommerce()
        .get_product_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {slug}")))
}

/// Free-text product search.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Product>>> {
    let q = params.q.trim();
    if q.is_empty() {
        return Err(AppError::BadRequest("search query is empty".to_string()));
    }

    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    Ok(Json(state.woocommerce().search_products(q, limit).await?))
}

/// Featured products.
#[instrument(skip(state))]
pub async fn featured(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> Result<Json<Vec<Product>>> {
    let limit = params.limit.unwrap_or(DEFAULT_FEATURED_LIMIT);
    Ok(Json(state.woocommerce().get_featured_products(limit).await?))
}

/// List product categories.
#[instrument(skip(state))]
pub async fn categories(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<Category>>> {
    Ok(Json(state.woocommerce().get_categories(&query).await?))
}

/// Products in a category.
#[instrument(skip(state))]
pub async fn category_products(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Query(page): Query<PageOptions>,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(
        state.woocommerce().get_products_by_category(id, page).await?,
    ))
}

/// Create an order.
#[instrument(skip(state, order))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(order): Json<NewOrder>,
) -> Result<(StatusCode, Json<CreatedOrder>)> {
    if order.line_items.is_empty() {
        return Err(AppError::BadRequest("order has no line items".to_string()));
    }

    let created = state.woocommerce().create_order(&order).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Store metadata.
#[instrument(skip(state))]
pub async fn store_info(State(state): State<AppState>) -> Result<Json<StoreInfo>> {
    Ok(Json(state.wordpress().get_store_info().await?))
}

/// WordPress connection probe.
#[instrument(skip(state))]
pub async fn connection(State(state): State<AppState>) -> Result<Json<ConnectionTest>> {
    Ok(Json(state.wordpress().test_connection().await?))
}

/// Testimonials. Always 200; empty when WordPress is unavailable.
#[instrument(skip(state))]
pub async fn testimonials(State(state): State<AppState>) -> Json<Vec<ContentRecord>> {
    Json(state.wordpress().get_testimonials().await)
}

/// FAQs. Always 200; empty when WordPress is unavailable.
#[instrument(skip(state))]
pub async fn faqs(State(state): State<AppState>) -> Json<Vec<ContentRecord>> {
    Json(state.wordpress().get_faqs().await)
}
