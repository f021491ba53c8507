//! Integration tests for the headless WooCommerce clients.
//!
//! Tests run the real reqwest transports against [`MockSite`], an in-process
//! axum server that imitates the WordPress REST routes the storefront uses:
//!
//! ```text
//! GET  /wp-json/wc/v3/products                  - consumer key/secret required
//! GET  /wp-json/wc/v3/products/{id}
//! GET  /wp-json/wc/v3/products/categories
//! POST /wp-json/wc/v3/orders
//! GET  /wp-json/headless/v1/test
//! GET  /wp-json/headless/v1/store-info
//! GET  /wp-json/headless/v1/featured-products   - 404 unless configured
//! GET  /wp-json/wp/v2/testimonial               - 404 unless configured
//! GET  /wp-json/wp/v2/faq                       - 404 unless configured
//! ```
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p headless-woo-integration-tests
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use headless_woo_storefront::config::StorefrontConfig;
use headless_woo_storefront::state::AppState;
use serde_json::{Value, json};

pub const CONSUMER_KEY: &str = "ck_integration";
pub const CONSUMER_SECRET: &str = "cs_integration";

/// Build a WooCommerce product payload.
#[must_use]
pub fn product(id: u64, slug: &str, featured: bool) -> Value {
    json!({
        "id": id,
        "name": format!("Product {id}"),
        "slug": slug,
        "type": "simple",
        "status": "publish",
        "featured": featured,
        "description": "<p>Description</p>",
        "short_description": "",
        "sku": format!("SKU-{id}"),
        "price": "25.00",
        "regular_price": "25.00",
        "sale_price": "",
        "on_sale": false,
        "stock_status": "instock",
        "stock_quantity": null,
        "images": [],
        "categories": [{"id": 9, "name": "Clothing", "slug": "clothing"}],
        "attributes": []
    })
}

/// A request the mock site received.
#[derive(Debug, Clone)]
pub struct ObservedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
}

/// Canned content for the mock site.
#[derive(Debug, Clone)]
pub struct MockSite {
    pub products: Vec<Value>,
    pub categories: Vec<Value>,
    /// `None` answers the featured endpoint with 404.
    pub featured: Option<Vec<Value>>,
    pub testimonials: Option<Vec<Value>>,
    pub faqs: Option<Vec<Value>>,
    pub store_info: Value,
}

impl Default for MockSite {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            featured: None,
            testimonials: None,
            faqs: None,
            store_info: json!({
                "name": "Maple Goods",
                "description": "Just another WordPress site",
                "currency": "CAD",
                "currency_symbol": "&#36;",
                "country": "CA:ON",
                "timezone": "America/Toronto",
                "date_format": "F j, Y",
                "time_format": "g:i a"
            }),
        }
    }
}

struct MockState {
    site: MockSite,
    requests: Mutex<Vec<ObservedRequest>>,
    next_order_id: AtomicU64,
}

type Shared = Arc<MockState>;

/// A running mock site.
pub struct MockServer {
    url: String,
    state: Shared,
}

impl MockSite {
    /// Serve this site on an ephemeral local port.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start(self) -> MockServer {
        let state = Arc::new(MockState {
            site: self,
            requests: Mutex::new(Vec::new()),
            next_order_id: AtomicU64::new(700),
        });

        let app = Router::new()
            .route("/wp-json/wc/v3/products", get(products))
            .route("/wp-json/wc/v3/products/categories", get(categories))
            .route("/wp-json/wc/v3/products/{id}", get(product_by_id))
            .route("/wp-json/wc/v3/orders", post(create_order))
            .route("/wp-json/headless/v1/test", get(connection_test))
            .route("/wp-json/headless/v1/store-info", get(store_info))
            .route("/wp-json/headless/v1/featured-products", get(featured))
            .route("/wp-json/wp/v2/testimonial", get(testimonials))
            .route("/wp-json/wp/v2/faq", get(faqs))
            .layer(middleware::from_fn_with_state(state.clone(), record))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock site");
        let addr = listener.local_addr().expect("Mock site has no address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        MockServer {
            url: format!("http://{addr}"),
            state,
        }
    }
}

impl MockServer {
    /// Site root, as `WORDPRESS_URL` would hold it.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Storefront configuration pointing at this site with valid credentials.
    #[must_use]
    pub fn config(&self) -> StorefrontConfig {
        self.config_with_credentials(CONSUMER_KEY, CONSUMER_SECRET)
    }

    /// Storefront configuration pointing at this site.
    ///
    /// # Panics
    ///
    /// Panics if the configuration cannot be built.
    #[must_use]
    pub fn config_with_credentials(&self, key: &str, secret: &str) -> StorefrontConfig {
        let vars = HashMap::from([
            ("WORDPRESS_URL", self.url.clone()),
            ("WC_CONSUMER_KEY", key.to_string()),
            ("WC_CONSUMER_SECRET", secret.to_string()),
            ("STOREFRONT_PORT", "0".to_string()),
        ]);
        StorefrontConfig::from_lookup(|name| vars.get(name).cloned())
            .expect("Mock configuration is valid")
    }

    /// Application state backed by real HTTP transports.
    ///
    /// # Panics
    ///
    /// Panics if the transports cannot be built.
    #[must_use]
    pub fn app_state(&self) -> AppState {
        AppState::new(self.config()).expect("Failed to build application state")
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<ObservedRequest> {
        self.state
            .requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Requests received for `path` (relative to the site root).
    #[must_use]
    pub fn requests_to(&self, path: &str) -> Vec<ObservedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }
}

// =============================================================================
// Handlers
// =============================================================================

async fn record(State(state): State<Shared>, request: Request, next: Next) -> Response {
    let query = Query::<HashMap<String, String>>::try_from_uri(request.uri())
        .map(|Query(query)| query)
        .unwrap_or_default();

    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(ObservedRequest {
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
            query,
        });

    next.run(request).await
}

fn authorized(query: &HashMap<String, String>) -> bool {
    query.get("consumer_key").map(String::as_str) == Some(CONSUMER_KEY)
        && query.get("consumer_secret").map(String::as_str) == Some(CONSUMER_SECRET)
}

fn rest_error(status: StatusCode, code: &str) -> Response {
    (status, Json(json!({"code": code, "message": code, "data": {"status": status.as_u16()}})))
        .into_response()
}

fn unauthorized() -> Response {
    rest_error(StatusCode::UNAUTHORIZED, "woocommerce_rest_cannot_view")
}

fn listing_or_404(items: Option<&Vec<Value>>) -> Response {
    items.map_or_else(
        || rest_error(StatusCode::NOT_FOUND, "rest_no_route"),
        |items| Json(items.clone()).into_response(),
    )
}

async fn products(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&query) {
        return unauthorized();
    }

    let matches = |product: &&Value| {
        let slug_ok = query
            .get("slug")
            .is_none_or(|slug| product["slug"] == slug.as_str());
        let featured_ok = query.get("featured").is_none_or(|featured| {
            product["featured"].as_bool() == Some(featured == "true")
        });
        let category_ok = query.get("category").is_none_or(|category| {
            product["categories"]
                .as_array()
                .is_some_and(|cats| cats.iter().any(|c| c["id"].to_string() == *category))
        });
        let search_ok = query.get("search").is_none_or(|search| {
            product["name"]
                .as_str()
                .is_some_and(|name| name.to_lowercase().contains(&search.to_lowercase()))
        });
        slug_ok && featured_ok && category_ok && search_ok
    };

    let per_page = query
        .get("per_page")
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(10);
    let page = query
        .get("page")
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1);

    let page_items: Vec<Value> = state
        .site
        .products
        .iter()
        .filter(matches)
        .skip((page - 1) * per_page)
        .take(per_page)
        .cloned()
        .collect();

    Json(page_items).into_response()
}

async fn product_by_id(
    State(state): State<Shared>,
    Path(id): Path<u64>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&query) {
        return unauthorized();
    }

    state
        .site
        .products
        .iter()
        .find(|product| product["id"].as_u64() == Some(id))
        .map_or_else(
            || rest_error(StatusCode::NOT_FOUND, "woocommerce_rest_product_invalid_id"),
            |product| Json(product.clone()).into_response(),
        )
}

async fn categories(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&query) {
        return unauthorized();
    }

    let hide_empty = query.get("hide_empty").is_some_and(|v| v == "true");
    let categories: Vec<Value> = state
        .site
        .categories
        .iter()
        .filter(|category| !hide_empty || category["count"].as_u64().unwrap_or(0) > 0)
        .cloned()
        .collect();

    Json(categories).into_response()
}

async fn create_order(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
    Json(order): Json<Value>,
) -> Response {
    if !authorized(&query) {
        return unauthorized();
    }

    let id = state.next_order_id.fetch_add(1, Ordering::SeqCst);
    let status = if order["set_paid"] == true {
        "processing"
    } else {
        "pending"
    };
    let created = json!({
        "id": id,
        "number": id.to_string(),
        "status": status,
        "currency": "CAD",
        "total": "50.00",
        "payment_method": order["payment_method"],
        "line_items": order["line_items"],
    });

    (StatusCode::CREATED, Json(created)).into_response()
}

async fn connection_test() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "Headless WooCommerce API is working",
        "wordpress_version": "6.4.2",
        "woocommerce_version": "8.5.1"
    }))
}

async fn store_info(State(state): State<Shared>) -> Json<Value> {
    Json(state.site.store_info.clone())
}

async fn featured(State(state): State<Shared>) -> Response {
    listing_or_404(state.site.featured.as_ref())
}

async fn testimonials(State(state): State<Shared>) -> Response {
    listing_or_404(state.site.testimonials.as_ref())
}

async fn faqs(State(state): State<Shared>) -> Response {
    listing_or_404(state.site.faqs.as_ref())
}
