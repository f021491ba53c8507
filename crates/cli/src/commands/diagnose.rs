//! Connectivity diagnostics.
//!
//! Runs the same three checks as the `/test` dashboard and prints a plain
//! text report.

use std::fmt::{self, Write};

use headless_woo_core::display;
use headless_woo_storefront::config::StorefrontConfig;
use headless_woo_storefront::diagnostics::{DiagnosticReport, run_diagnostics};
use headless_woo_storefront::state::AppState;

use super::CliError;

/// Run the checks and print the report.
///
/// # Errors
///
/// Returns `CliError::DiagnosticsFailed` if any check failed.
#[allow(clippy::print_stdout)]
pub async fn run(state: &AppState) -> Result<(), CliError> {
    let report = run_diagnostics(state.woocommerce(), state.wordpress()).await;
    print!("{}", render(&report, state.config()));

    match report.errors().len() {
        0 => Ok(()),
        failed => Err(CliError::DiagnosticsFailed(failed)),
    }
}

/// Render a report as text.
pub fn render(report: &DiagnosticReport, config: &StorefrontConfig) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, report, config);
    out
}

fn write_report(
    out: &mut impl Write,
    report: &DiagnosticReport,
    config: &StorefrontConfig,
) -> fmt::Result {
    let errors = report.errors();

    writeln!(out, "API Test Report ({})", report.checked_at.to_rfc3339())?;
    writeln!(out)?;

    if errors.is_empty() {
        writeln!(out, "All connections successful")?;
    } else {
        writeln!(out, "Errors ({}):", errors.len())?;
        for error in &errors {
            writeln!(out, "  - {error}")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "WordPress Connection")?;
    match &report.connection {
        Ok(test) => {
            writeln!(out, "  Status: Connected")?;
            writeln!(
                out,
                "  WordPress: {}",
                test.wordpress_version.as_deref().unwrap_or("unknown")
            )?;
            writeln!(
                out,
                "  WooCommerce: {}",
                test.woocommerce_version.as_deref().unwrap_or("unknown")
            )?;
        }
        Err(e) => writeln!(out, "  Connection failed: {e}")?,
    }
    writeln!(out)?;

    writeln!(out, "Store Information")?;
    match &report.store_info {
        Ok(info) => {
            writeln!(out, "  Name: {}", info.name)?;
            writeln!(out, "  Currency: {}", info.currency)?;
            writeln!(out, "  Country: {}", info.country)?;
            writeln!(out, "  Timezone: {}", info.timezone)?;
        }
        Err(e) => writeln!(out, "  Failed to load: {e}")?,
    }
    writeln!(out)?;

    let products = report.products();
    writeln!(out, "Products ({})", products.len())?;
    if let Err(e) = &report.products {
        writeln!(out, "  Failed to load: {e}")?;
    }
    for product in products {
        write!(
            out,
            "  #{} {} | {} | {}",
            product.id,
            product.name,
            display::format_price_in(&product.price, &config.currency),
            display::stock_status_text(product)
        )?;
        if display::is_on_sale(product) {
            write!(
                out,
                " | Sale: {}% off",
                display::sale_percentage(&product.regular_price, &product.sale_price)
            )?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    let key_status = if config.wordpress.consumer_key.is_empty() {
        "Missing"
    } else {
        "Set"
    };
    writeln!(out, "Environment")?;
    writeln!(out, "  WordPress URL: {}", config.wordpress.site_url)?;
    writeln!(out, "  Currency: {}", config.currency)?;
    writeln!(out, "  Consumer Key: {key_status}")
}
