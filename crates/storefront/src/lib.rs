//! Headless WooCommerce storefront library.
//!
//! Typed clients for a WordPress site running WooCommerce, plus the axum
//! routes served by the `headless-woo-storefront` binary.
//!
//! - [`transport`] - HTTP clients for the catalog (`wc/v3`) and content
//!   (`/wp-json`) APIs behind the [`transport::Transport`] seam
//! - [`woocommerce`] - products, categories, featured products, orders
//! - [`wordpress`] - connection probe, store info, testimonials, FAQs
//! - [`diagnostics`] - the connectivity self-check

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod routes;
pub mod state;
pub mod transport;
pub mod woocommerce;
pub mod wordpress;
