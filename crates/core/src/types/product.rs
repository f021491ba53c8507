//! Product shapes as returned by `wc/v3/products`.
//!
//! Deserialization is lenient: WooCommerce omits fields depending on product
//! type and plugins, and sends `null` for unmanaged stock. Missing fields fall
//! back to their defaults rather than failing the whole response.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{AttributeId, CategoryId, ImageId, ProductId};

/// Inventory state of a product.
///
/// Unrecognised wire values decode to [`StockStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    #[serde(rename = "instock")]
    InStock,
    #[serde(rename = "outofstock")]
    OutOfStock,
    #[serde(rename = "onbackorder")]
    OnBackorder,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A catalog product.
///
/// Prices are kept as the decimal strings WooCommerce sends; an empty
/// `sale_price` means "not on sale". `on_sale` is supplied by the server and
/// is not cross-checked against the prices here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    /// `simple`, `variable`, `grouped` or `external`.
    #[serde(rename = "type")]
    pub product_type: String,
    /// `publish`, `draft`, `pending` or `private`.
    pub status: String,
    pub featured: bool,
    /// HTML.
    pub description: String,
    /// HTML.
    pub short_description: String,
    pub sku: String,
    pub price: String,
    pub regular_price: String,
    pub sale_price: String,
    pub on_sale: bool,
    pub stock_status: StockStatus,
    /// `None` when stock is not managed.
    pub stock_quantity: Option<i64>,
    pub images: Vec<ProductImage>,
    pub categories: Vec<CategoryRef>,
    pub attributes: Vec<ProductAttribute>,
    /// Custom fields exposed by the headless plugin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_fields: Option<ExtraFields>,
    /// Multi-resolution gallery exposed by the headless plugin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_images: Option<Vec<GalleryImage>>,
}

impl Product {
    /// Parsed `price`, if it is a valid decimal.
    #[must_use]
    pub fn price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.price)
    }

    /// Parsed `regular_price`, if it is a valid decimal.
    #[must_use]
    pub fn regular_price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.regular_price)
    }

    /// Parsed `sale_price`, if it is a valid decimal.
    #[must_use]
    pub fn sale_price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.sale_price)
    }
}

/// Product image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductImage {
    pub id: ImageId,
    pub src: String,
    pub name: String,
    pub alt: String,
}

/// Category reference embedded in a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

/// Variant dimension (e.g. "Size" with options `["S", "M", "L"]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductAttribute {
    /// `0` for custom (non-taxonomy) attributes.
    pub id: AttributeId,
    pub name: String,
    pub options: Vec<String>,
}

/// Merchandising fields added by the headless plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraFields {
    pub size_guide_url: String,
    pub material: String,
    pub care_instructions: String,
    pub sustainability_info: String,
}

/// Gallery image with pre-sized renditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub id: ImageId,
    /// Full-size URL.
    pub url: String,
    pub thumbnail: String,
    pub medium: String,
    pub alt: String,
}

/// Parse a WooCommerce decimal string (`"19.99"`, `" 5 "`). Empty → `None`.
pub(crate) fn parse_decimal(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<Decimal>().ok()
}
