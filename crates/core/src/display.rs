//! Presentation helpers over already-fetched catalog data.
//!
//! Everything here is pure and total: bad input degrades to a fixed display
//! value instead of an error, so templates can call these without guards.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::types::{Category, CurrencyCode, Product, StockStatus};

/// Currency used when the caller does not name one.
pub const DEFAULT_CURRENCY: &str = "CAD";

/// Rendered for prices that are not numbers.
pub const ZERO_PRICE: &str = "$0.00";

/// Image path used when a product has no images.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-product.jpg";

#[allow(clippy::expect_used)]
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"));

/// A price as callers hold it: a WooCommerce decimal string or a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceInput<'a> {
    Text(&'a str),
    Number(f64),
    Decimal(Decimal),
}

impl<'a> From<&'a str> for PriceInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for PriceInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for PriceInput<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Decimal> for PriceInput<'_> {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl PriceInput<'_> {
    fn to_decimal(self) -> Option<Decimal> {
        match self {
            Self::Text(text) => parse_number(text),
            Self::Number(number) => Decimal::from_f64(number),
            Self::Decimal(decimal) => Some(decimal),
        }
    }

    fn to_f64(self) -> Option<f64> {
        match self {
            Self::Text(text) => text.trim().parse::<f64>().ok(),
            Self::Number(number) => Some(number),
            Self::Decimal(decimal) => decimal.to_f64(),
        }
    }
}

/// Format a price in the default currency (CAD).
///
/// ```
/// use headless_woo_core::display::format_price;
///
/// assert_eq!(format_price("1299.5"), "$1,299.50");
/// assert_eq!(format_price("call us"), "$0.00");
/// ```
#[must_use]
pub fn format_price<'a>(price: impl Into<PriceInput<'a>>) -> String {
    format_price_in(price, DEFAULT_CURRENCY)
}

/// Format a price in the given ISO currency.
///
/// Non-numeric input renders as [`ZERO_PRICE`] regardless of currency.
/// Finite amounts beyond the `Decimal` range are still rendered.
#[must_use]
pub fn format_price_in<'a>(price: impl Into<PriceInput<'a>>, currency: &str) -> String {
    let price = price.into();
    let code = CurrencyCode::from_code(currency);
    if let Some(amount) = price.to_decimal() {
        return code.format(amount);
    }
    price
        .to_f64()
        .and_then(|amount| code.format_wide(amount))
        .unwrap_or_else(|| ZERO_PRICE.to_string())
}

/// Whether the product should show a sale badge.
#[must_use]
pub fn is_on_sale(product: &Product) -> bool {
    product.on_sale && !product.sale_price.is_empty()
}

/// Discount from `regular_price` to `sale_price` in whole percent.
///
/// Returns 0 when there is no sale price, when the regular price is zero or
/// not a number, and when the result overflows. Halves round up (`12.5` →
/// `13`, `-12.5` → `-12`).
#[must_use]
pub fn sale_percentage(regular_price: &str, sale_price: &str) -> i64 {
    if sale_price.trim().is_empty() {
        return 0;
    }
    let Some(regular) = parse_number(regular_price) else {
        return 0;
    };
    if regular.is_zero() {
        return 0;
    }
    let Some(sale) = parse_number(sale_price) else {
        return 0;
    };

    regular
        .checked_sub(sale)
        .and_then(|discount| discount.checked_div(regular))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|percent| percent.checked_add(Decimal::new(5, 1)))
        .and_then(|percent| percent.floor().to_i64())
        .unwrap_or(0)
}

/// First image URL, or [`PLACEHOLDER_IMAGE`].
#[must_use]
pub fn main_image(product: &Product) -> &str {
    product
        .images
        .first()
        .map_or(PLACEHOLDER_IMAGE, |image| image.src.as_str())
}

/// Remove markup tags from an HTML fragment.
///
/// This is a tag-pattern strip for display text, not a sanitizer: malformed
/// markup or a stray `<` can leave fragments behind.
#[must_use]
pub fn strip_html(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Storefront path for a product.
#[must_use]
pub fn product_url(product: &Product) -> String {
    format!("/products/{}", product.slug)
}

/// Storefront path for a category.
#[must_use]
pub fn category_url(category: &Category) -> String {
    format!("/categories/{}", category.slug)
}

#[must_use]
pub fn is_in_stock(product: &Product) -> bool {
    product.stock_status == StockStatus::InStock
}

/// Human-readable stock status.
#[must_use]
pub const fn stock_status_text(product: &Product) -> &'static str {
    match product.stock_status {
        StockStatus::InStock => "In Stock",
        StockStatus::OutOfStock => "Out of Stock",
        StockStatus::OnBackorder => "On Backorder",
        StockStatus::Unknown => "Unknown",
    }
}

/// Parse a decimal string, accepting exponent notation (`"1e3"`).
fn parse_number(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Decimal>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().and_then(Decimal::from_f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductImage;

    fn product_with_stock(stock_status: StockStatus) -> Product {
        Product {
            stock_status,
            ..Product::default()
        }
    }

    #[test]
    fn test_format_price_non_numeric_is_zero() {
        for input in ["", "abc", "NaN", "inf", "  "] {
            assert_eq!(format_price(input), ZERO_PRICE, "input {input:?}");
        }
        assert_eq!(format_price(f64::NAN), ZERO_PRICE);
        assert_eq!(format_price_in("n/a", "EUR"), ZERO_PRICE);
    }

    #[test]
    fn test_format_price_numeric_inputs() {
        assert_eq!(format_price("19.99"), "$19.99");
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(Decimal::new(250_000, 2)), "$2,500.00");
        assert_eq!(format_price("1e3"), "$1,000.00");
        assert_eq!(format_price_in("19.99", "USD"), "US$19.99");
    }

    #[test]
    fn test_is_on_sale_requires_sale_price() {
        let mut product = Product {
            on_sale: true,
            ..Product::default()
        };
        assert!(!is_on_sale(&product));

        product.sale_price = "15.00".to_string();
        assert!(is_on_sale(&product));

        product.on_sale = false;
        assert!(!is_on_sale(&product));
    }

    #[test]
    fn test_sale_percentage() {
        assert_eq!(sale_percentage("100", "75"), 25);
        assert_eq!(sale_percentage("19.99", "14.99"), 25);
        assert_eq!(sale_percentage("80", "70"), 13);
        assert_eq!(sale_percentage("3", "2"), 33);
    }

    #[test]
    fn test_sale_percentage_degenerate_inputs() {
        assert_eq!(sale_percentage("100", ""), 0);
        assert_eq!(sale_percentage("0", "10"), 0);
        assert_eq!(sale_percentage("0.00", "10"), 0);
        assert_eq!(sale_percentage("", "10"), 0);
        assert_eq!(sale_percentage("100", "free"), 0);
    }

    #[test]
    fn test_sale_percentage_overflow_is_zero() {
        // Ratio times 100 exceeds the Decimal range
        assert_eq!(sale_percentage("0.0000000000000000000000000001", "1"), 0);
        // Difference exceeds the Decimal range
        assert_eq!(
            sale_percentage(
                "79228162514264337593543950335",
                "-79228162514264337593543950335"
            ),
            0
        );
        assert_eq!(sale_percentage("1e300", "1"), 0);
        // Fits in Decimal, not in i64
        assert_eq!(sale_percentage("0.0000000000000000000000001", "1"), 0);
    }

    #[test]
    fn test_format_price_out_of_decimal_range() {
        assert_eq!(
            format_price(1e30),
            "$1,000,000,000,000,000,000,000,000,000,000.00"
        );
        assert_eq!(
            format_price("-1e30"),
            "-$1,000,000,000,000,000,000,000,000,000,000.00"
        );
        assert_eq!(format_price_in(1e30, "JPY"), "JP¥1,000,000,000,000,000,000,000,000,000,000");

        let largest = format_price(f64::MAX);
        assert!(largest.starts_with("$179,769,313,486,231,57"), "{largest}");
        assert!(largest.ends_with(",000.00"), "{largest}");

        assert_eq!(format_price(f64::INFINITY), ZERO_PRICE);
        assert_eq!(format_price("-inf"), ZERO_PRICE);
    }

    #[test]
    fn test_format_price_ignores_trailing_text() {
        assert_eq!(format_price("12abc"), ZERO_PRICE);
    }

    #[test]
    fn test_sale_percentage_rounds_half_up() {
        // (80 - 70) / 80 = 12.5%
        assert_eq!(sale_percentage("80", "70"), 13);
        // (80 - 90) / 80 = -12.5%
        assert_eq!(sale_percentage("80", "90"), -12);
    }

    #[test]
    fn test_main_image() {
        let mut product = Product::default();
        assert_eq!(main_image(&product), PLACEHOLDER_IMAGE);

        product.images = vec![
            ProductImage {
                src: "https://cdn.example.com/a.jpg".to_string(),
                ..ProductImage::default()
            },
            ProductImage {
                src: "https://cdn.example.com/b.jpg".to_string(),
                ..ProductImage::default()
            },
        ];
        assert_eq!(main_image(&product), "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Soft <strong>organic</strong> cotton.</p>"), "Soft organic cotton.");
        assert_eq!(strip_html("no markup"), "no markup");
        assert_eq!(strip_html("<br/>"), "");
        // Not a sanitizer: an unterminated tag survives.
        assert_eq!(strip_html("a < b"), "a < b");
    }

    #[test]
    fn test_urls() {
        let product = Product {
            slug: "linen-shirt".to_string(),
            ..Product::default()
        };
        let category = Category {
            slug: "tops".to_string(),
            ..Category::default()
        };
        assert_eq!(product_url(&product), "/products/linen-shirt");
        assert_eq!(category_url(&category), "/categories/tops");
    }

    #[test]
    fn test_stock_helpers() {
        assert!(is_in_stock(&product_with_stock(StockStatus::InStock)));
        assert!(!is_in_stock(&product_with_stock(StockStatus::OnBackorder)));

        assert_eq!(stock_status_text(&product_with_stock(StockStatus::InStock)), "In Stock");
        assert_eq!(
            stock_status_text(&product_with_stock(StockStatus::OutOfStock)),
            "Out of Stock"
        );
        assert_eq!(
            stock_status_text(&product_with_stock(StockStatus::OnBackorder)),
            "On Backorder"
        );
        assert_eq!(stock_status_text(&product_with_stock(StockStatus::Unknown)), "Unknown");
    }

    #[test]
    fn test_stock_status_text_from_wire_value() {
        let product: Product =
            serde_json::from_value(serde_json::json!({"stock_status": "onbackorder"}))
                .unwrap_or_default();
        assert_eq!(stock_status_text(&product), "On Backorder");
    }
}
