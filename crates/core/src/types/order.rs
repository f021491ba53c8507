//! Order creation payloads for `wc/v3/orders`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::{OrderId, ProductId};

/// A new order submitted at checkout.
///
/// Billing and shipping blocks are passed through untouched; WooCommerce
/// validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Gateway identifier, e.g. `bacs`.
    pub payment_method: String,
    pub payment_method_title: String,
    pub set_paid: bool,
    #[serde(default)]
    pub billing: Map<String, Value>,
    #[serde(default)]
    pub shipping: Map<String, Value>,
    pub line_items: Vec<OrderLineItem>,
}

/// One product line in a [`NewOrder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// The order WooCommerce created.
///
/// Only the fields callers routinely need are typed; everything else the
/// server returned is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub id: OrderId,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub currency: String,
    /// Order total as a decimal string.
    #[serde(default)]
    pub total: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
