//! API test dashboard.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use headless_woo_core::{Product, StoreInfo, display};
use tracing::instrument;

use crate::diagnostics::{DiagnosticReport, run_diagnostics};
use crate::state::AppState;

/// Product card display data.
#[derive(Clone)]
pub struct ProductCardView {
    pub name: String,
    /// Main image URL, if the product has any images.
    pub image: Option<String>,
    pub price: String,
    pub stock: &'static str,
    /// Discount in whole percent, set only for products on sale.
    pub sale_percentage: Option<i64>,
}

impl ProductCardView {
    fn new(product: &Product, currency: &str) -> Self {
        Self {
            name: product.name.clone(),
            image: (!product.images.is_empty())
                .then(|| display::main_image(product).to_string()),
            price: display::format_price_in(&product.price, currency),
            stock: display::stock_status_text(product),
            sale_percentage: display::is_on_sale(product).then(|| {
                display::sale_percentage(&product.regular_price, &product.sale_price)
            }),
        }
    }
}

/// Connection probe display data.
#[derive(Clone)]
pub struct ConnectionView {
    pub wordpress_version: String,
    pub woocommerce_version: String,
}

/// Environment block display data. Never carries secrets.
#[derive(Clone)]
pub struct EnvironmentView {
    pub wordpress_url: String,
    pub currency: String,
    pub consumer_key_set: bool,
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub errors: Vec<&'static str>,
    pub connection: Option<ConnectionView>,
    pub store: Option<StoreInfo>,
    pub products: Vec<ProductCardView>,
    pub environment: EnvironmentView,
    pub checked_at: String,
}

impl DashboardTemplate {
    fn from_report(report: &DiagnosticReport, environment: EnvironmentView) -> Self {
        let connection = report.connection.as_ref().ok().map(|test| ConnectionView {
            wordpress_version: test.wordpress_version.clone().unwrap_or_default(),
            woocommerce_version: test.woocommerce_version.clone().unwrap_or_default(),
        });

        let products = report
            .products()
            .iter()
            .map(|product| ProductCardView::new(product, &environment.currency))
            .collect();

        Self {
            errors: report.errors(),
            connection,
            store: report.store_info.as_ref().ok().cloned(),
            products,
            environment,
            checked_at: report.checked_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

/// Run the connectivity checks and render the results.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let report = run_diagnostics(state.woocommerce(), state.wordpress()).await;

    let config = state.config();
    let environment = EnvironmentView {
        wordpress_url: config.wordpress.site_url.clone(),
        currency: config.currency.clone(),
        consumer_key_set: !config.wordpress.consumer_key.is_empty(),
    };

    DashboardTemplate::from_report(&report, environment)
}
