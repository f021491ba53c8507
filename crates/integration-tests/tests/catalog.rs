//! Catalog accessor against the mock site over real HTTP.

#![allow(clippy::unwrap_used)]

use headless_woo_core::{NewOrder, OrderLineItem, ProductId, StockStatus};
use headless_woo_integration_tests::{CONSUMER_KEY, CONSUMER_SECRET, MockSite, product};
use headless_woo_storefront::state::AppState;
use headless_woo_storefront::woocommerce::{CategoryQuery, PageOptions, ProductQuery};
use serde_json::json;

fn catalog(count: u64) -> MockSite {
    MockSite {
        products: (1..=count)
            .map(|id| product(id, &format!("product-{id}"), id % 2 == 0))
            .collect(),
        categories: vec![
            json!({"id": 9, "name": "Clothing", "slug": "clothing", "description": "", "image": null, "count": 12}),
            json!({"id": 15, "name": "Uncategorized", "slug": "uncategorized", "description": "", "image": null, "count": 0}),
        ],
        ..MockSite::default()
    }
}

#[tokio::test]
async fn test_products_page_of_five_with_credentials() {
    let server = catalog(12).start().await;
    let state = server.app_state();

    let products = state
        .woocommerce()
        .get_products(&ProductQuery::new().per_page(5))
        .await
        .unwrap();

    let ids: Vec<u64> = products.iter().map(|p| p.id.as_u64()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(products[0].stock_status, StockStatus::InStock);

    let requests = server.requests_to("/wp-json/wc/v3/products");
    assert_eq!(requests.len(), 1);
    let query = &requests[0].query;
    assert_eq!(query.get("per_page").map(String::as_str), Some("5"));
    assert_eq!(query.get("consumer_key").map(String::as_str), Some(CONSUMER_KEY));
    assert_eq!(query.get("consumer_secret").map(String::as_str), Some(CONSUMER_SECRET));
}

#[tokio::test]
async fn test_second_page() {
    let server = catalog(12).start().await;
    let state = server.app_state();

    let products = state
        .woocommerce()
        .get_products(&ProductQuery::new().per_page(5).page(3))
        .await
        .unwrap();

    let ids: Vec<u64> = products.iter().map(|p| p.id.as_u64()).collect();
    assert_eq!(ids, vec![11, 12]);
}

#[tokio::test]
async fn test_wrong_credentials_surface_status() {
    let server = catalog(3).start().await;
    let state = AppState::new(server.config_with_credentials("ck_wrong", "cs_wrong")).unwrap();

    let err = state
        .woocommerce()
        .get_products(&ProductQuery::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("woocommerce_rest_cannot_view"));
}

#[tokio::test]
async fn test_product_by_id() {
    let server = catalog(3).start().await;
    let state = server.app_state();

    let product = state.woocommerce().get_product(ProductId::new(2)).await.unwrap();
    assert_eq!(product.slug, "product-2");
    assert_eq!(product.sku, "SKU-2");

    let err = state
        .woocommerce()
        .get_product(ProductId::new(99))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_product_by_slug() {
    let server = catalog(3).start().await;
    let state = server.app_state();

    let hit = state.woocommerce().get_product_by_slug("product-3").await.unwrap();
    assert_eq!(hit.unwrap().id, ProductId::new(3));

    let miss = state.woocommerce().get_product_by_slug("no-such-thing").await.unwrap();
    assert!(miss.is_none());
}

#[tokio::test]
async fn test_search_and_category_listing() {
    let server = catalog(12).start().await;
    let state = server.app_state();

    let found = state.woocommerce().search_products("product 1", 20).await.unwrap();
    let ids: Vec<u64> = found.iter().map(|p| p.id.as_u64()).collect();
    assert_eq!(ids, vec![1, 10, 11, 12]);

    let page = PageOptions {
        per_page: Some(4),
        page: None,
    };
    let in_category = state
        .woocommerce()
        .get_products_by_category(headless_woo_core::CategoryId::new(9), page)
        .await
        .unwrap();
    assert_eq!(in_category.len(), 4);
}

#[tokio::test]
async fn test_categories_hide_empty() {
    let server = catalog(1).start().await;
    let state = server.app_state();

    let all = state
        .woocommerce()
        .get_categories(&CategoryQuery::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let non_empty = state
        .woocommerce()
        .get_categories(&CategoryQuery {
            per_page: None,
            hide_empty: Some(true),
        })
        .await
        .unwrap();
    assert_eq!(non_empty.len(), 1);
    assert_eq!(non_empty[0].slug, "clothing");
}

#[tokio::test]
async fn test_create_order_twice_creates_two_orders() {
    let server = catalog(3).start().await;
    let state = server.app_state();

    let order = NewOrder {
        payment_method: "bacs".to_string(),
        payment_method_title: "Direct Bank Transfer".to_string(),
        set_paid: true,
        billing: json!({"first_name": "Jo", "email": "jo@example.com"})
            .as_object()
            .cloned()
            .unwrap(),
        shipping: serde_json::Map::new(),
        line_items: vec![OrderLineItem {
            product_id: ProductId::new(2),
            quantity: 2,
        }],
    };

    let first = state.woocommerce().create_order(&order).await.unwrap();
    let second = state.woocommerce().create_order(&order).await.unwrap();

    assert_eq!(first.status, "processing");
    assert_eq!(first.extra["line_items"][0]["quantity"], 2);
    assert_ne!(first.id, second.id);

    let posts = server.requests_to("/wp-json/wc/v3/orders");
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|request| request.method == "POST"));
}
