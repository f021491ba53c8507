//! Headless Woo Core - Shared types library.
//!
//! This crate provides the data model used across all Headless Woo components:
//! - `storefront` - API clients, diagnostic dashboard and JSON proxy
//! - `cli` - Command-line tools for inspecting the remote store
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Entities are transient DTOs: created from a remote response,
//! owned by whoever received them, never cached.
//!
//! # Modules
//!
//! - [`types`] - Catalog, store, cart, order and content shapes plus typed IDs
//! - [`display`] - Presentation helpers (prices, sale badges, stock text, URLs)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod display;
pub mod types;

pub use types::*;
