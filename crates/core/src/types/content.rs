//! WordPress content payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A WordPress post of a custom type (testimonial, FAQ).
///
/// Post-type schemas vary per site, so records stay untyped.
pub type ContentRecord = Map<String, Value>;

/// Result of the `headless/v1/test` diagnostic endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTest {
    #[serde(default)]
    pub wordpress_version: Option<String>,
    #[serde(default)]
    pub woocommerce_version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
