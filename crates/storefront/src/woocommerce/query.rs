//! Filter objects for catalog list endpoints.
//!
//! Each filter serializes to WooCommerce query parameters; unset options are
//! left out so the server applies its own defaults (10 per page, page 1).

use headless_woo_core::CategoryId;
use serde::{Deserialize, Serialize};

use crate::transport::QueryPairs;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filters for `GET products`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub category: Option<CategoryId>,
    pub featured: Option<bool>,
    pub on_sale: Option<bool>,
    pub search: Option<String>,
    /// `date`, `id`, `include`, `title`, `slug`, `price`, `popularity` or `rating`.
    pub orderby: Option<String>,
    pub order: Option<SortOrder>,
    pub slug: Option<String>,
}

impl ProductQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub const fn category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub const fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    #[must_use]
    pub const fn on_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = Some(on_sale);
        self
    }

    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.orderby = Some(field.into());
        self.order = Some(order);
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Query parameters for this filter.
    #[must_use]
    pub fn to_query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push(&mut pairs, "per_page", self.per_page);
        push(&mut pairs, "page", self.page);
        push(&mut pairs, "category", self.category);
        push(&mut pairs, "featured", self.featured);
        push(&mut pairs, "on_sale", self.on_sale);
        push(&mut pairs, "search", self.search.as_ref());
        push(&mut pairs, "orderby", self.orderby.as_ref());
        push(&mut pairs, "order", self.order.map(SortOrder::as_str));
        push(&mut pairs, "slug", self.slug.as_ref());
        pairs
    }
}

/// Filters for `GET products/categories`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryQuery {
    pub per_page: Option<u32>,
    pub hide_empty: Option<bool>,
}

impl CategoryQuery {
    #[must_use]
    pub fn to_query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push(&mut pairs, "per_page", self.per_page);
        push(&mut pairs, "hide_empty", self.hide_empty);
        pairs
    }
}

/// Paging for category listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

fn push(pairs: &mut QueryPairs, key: &str, value: Option<impl ToString>) {
    if let Some(value) = value {
        pairs.push((key.to_string(), value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_empty_query_sends_nothing() {
        assert!(ProductQuery::new().to_query_pairs().is_empty());
        assert!(CategoryQuery::default().to_query_pairs().is_empty());
    }

    #[test]
    fn test_product_query_pairs() {
        let query = ProductQuery::new()
            .per_page(12)
            .page(2)
            .category(CategoryId::new(9))
            .on_sale(true)
            .order_by("price", SortOrder::Desc);

        assert_eq!(
            query.to_query_pairs(),
            vec![
                pair("per_page", "12"),
                pair("page", "2"),
                pair("category", "9"),
                pair("on_sale", "true"),
                pair("orderby", "price"),
                pair("order", "desc"),
            ]
        );
    }

    #[test]
    fn test_featured_false_is_sent() {
        let query = ProductQuery::new().featured(false);
        assert_eq!(query.to_query_pairs(), vec![pair("featured", "false")]);
    }

    #[test]
    fn test_category_query_pairs() {
        let query = CategoryQuery {
            per_page: Some(100),
            hide_empty: Some(true),
        };
        assert_eq!(
            query.to_query_pairs(),
            vec![pair("per_page", "100"), pair("hide_empty", "true")]
        );
    }
}
