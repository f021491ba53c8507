//! Two-stage outcome of a featured-products lookup.

use headless_woo_core::Product;

use crate::transport::ApiError;

/// Which stage produced the featured products.
///
/// The content endpoint is tried first; only if it fails is the catalog
/// queried with `featured=true`. When both fail the caller gets
/// [`ApiError::FallbackExhausted`] instead of this type.
#[derive(Debug)]
pub enum FeaturedProducts {
    /// The `headless/v1/featured-products` endpoint answered.
    Primary(Vec<Product>),
    /// The endpoint failed and the catalog fallback answered.
    Fallback {
        primary_error: ApiError,
        products: Vec<Product>,
    },
}

impl FeaturedProducts {
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Primary(products) | Self::Fallback { products, .. } => products,
        }
    }

    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        match self {
            Self::Primary(products) | Self::Fallback { products, .. } => products,
        }
    }

    #[must_use]
    pub const fn used_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Why the primary stage failed, if it did.
    #[must_use]
    pub const fn primary_error(&self) -> Option<&ApiError> {
        match self {
            Self::Primary(_) => None,
            Self::Fallback { primary_error, .. } => Some(primary_error),
        }
    }
}
