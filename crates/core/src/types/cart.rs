//! Local cart line shape.
//!
//! Nothing in the API layer produces cart items; the type is the contract a
//! cart feature builds against.

use serde::{Deserialize, Serialize};

use super::id::{CartItemId, ProductId};
use super::product::Product;

/// A selected product line in a shopper's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub name: String,
    /// Unit price as a decimal string.
    pub price: String,
    pub quantity: u32,
    /// Image URL.
    pub image: String,
    pub slug: String,
}

impl CartItem {
    /// Build a cart line for `quantity` units of `product`.
    #[must_use]
    pub fn from_product(id: CartItemId, product: &Product, quantity: u32) -> Self {
        Self {
            id,
            product_id: product.id,
            name: product.name.clone(),
            price: product.price.clone(),
            quantity,
            image: crate::display::main_image(product).to_string(),
            slug: product.slug.clone(),
        }
    }
}
