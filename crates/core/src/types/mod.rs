//! Core types for Headless Woo.
//!
//! Shapes mirror the WooCommerce REST API (`wc/v3`) and the custom
//! `headless/v1` WordPress endpoints.

pub mod cart;
pub mod category;
pub mod content;
pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod store;

pub use cart::CartItem;
pub use category::{Category, CategoryImage};
pub use content::{ConnectionTest, ContentRecord};
pub use id::*;
pub use order::{CreatedOrder, NewOrder, OrderLineItem};
pub use price::CurrencyCode;
pub use product::{
    CategoryRef, ExtraFields, GalleryImage, Product, ProductAttribute, ProductImage, StockStatus,
};
pub use store::StoreInfo;
