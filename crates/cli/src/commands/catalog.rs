//! Catalog and store inspection commands. Output is pretty-printed JSON.

use headless_woo_core::{CategoryId, ProductId};
use headless_woo_storefront::state::AppState;
use headless_woo_storefront::woocommerce::{CategoryQuery, FeaturedProducts, ProductQuery};
use serde::Serialize;

use super::{CliError, print_json};

/// Product listing filters as given on the command line.
#[derive(Debug, Default)]
pub struct ProductFilter {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub search: Option<String>,
    pub category: Option<u64>,
    pub featured: bool,
    pub on_sale: bool,
}

impl ProductFilter {
    /// Unset flags are left out of the query rather than sent as `false`.
    pub fn to_query(&self) -> ProductQuery {
        ProductQuery {
            per_page: self.per_page,
            page: self.page,
            category: self.category.map(CategoryId::new),
            featured: self.featured.then_some(true),
            on_sale: self.on_sale.then_some(true),
            search: self.search.clone(),
            ..ProductQuery::default()
        }
    }
}

/// Featured products plus which stage answered.
#[derive(Debug, Serialize)]
struct FeaturedOutput<'a> {
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_error: Option<String>,
    products: &'a [headless_woo_core::Product],
}

impl<'a> From<&'a FeaturedProducts> for FeaturedOutput<'a> {
    fn from(featured: &'a FeaturedProducts) -> Self {
        Self {
            source: if featured.used_fallback() {
                "catalog"
            } else {
                "featured-endpoint"
            },
            primary_error: featured.primary_error().map(ToString::to_string),
            products: featured.products(),
        }
    }
}

pub async fn products(state: &AppState, filter: ProductFilter) -> Result<(), CliError> {
    let products = state.woocommerce().get_products(&filter.to_query()).await?;
    print_json(&products)
}

/// Look up a product by ID or slug.
pub async fn product(
    state: &AppState,
    id: Option<u64>,
    slug: Option<&str>,
) -> Result<(), CliError> {
    let product = match (id, slug) {
        (Some(id), _) => state.woocommerce().get_product(ProductId::new(id)).await?,
        (None, Some(slug)) => state
            .woocommerce()
            .get_product_by_slug(slug)
            .await?
            .ok_or_else(|| CliError::NotFound(format!("product with slug {slug}")))?,
        (None, None) => return Err(CliError::NotFound("no product ID or slug given".to_string())),
    };
    print_json(&product)
}

pub async fn categories(
    state: &AppState,
    per_page: Option<u32>,
    hide_empty: bool,
) -> Result<(), CliError> {
    let query = CategoryQuery {
        per_page,
        hide_empty: hide_empty.then_some(true),
    };
    let categories = state.woocommerce().get_categories(&query).await?;
    print_json(&categories)
}

pub async fn featured(state: &AppState, limit: u32) -> Result<(), CliError> {
    let featured = state
        .woocommerce()
        .get_featured_products_detailed(limit)
        .await?;
    print_json(&FeaturedOutput::from(&featured))
}

pub async fn store_info(state: &AppState) -> Result<(), CliError> {
    let info = state.wordpress().get_store_info().await?;
    print_json(&info)
}
