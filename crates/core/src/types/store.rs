//! Store metadata from the `headless/v1/store-info` endpoint.

use serde::{Deserialize, Serialize};

/// Snapshot of the store's general settings.
///
/// Fetched fresh on every call; the client never mutates or caches it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreInfo {
    pub name: String,
    pub description: String,
    /// ISO 4217 code, e.g. `CAD`.
    pub currency: String,
    pub currency_symbol: String,
    pub country: String,
    /// IANA zone name or UTC offset, as configured in WordPress.
    pub timezone: String,
    /// PHP date format string.
    pub date_format: String,
    /// PHP time format string.
    pub time_format: String,
}

impl StoreInfo {
    /// The store currency as a [`CurrencyCode`](super::CurrencyCode).
    #[must_use]
    pub fn currency_code(&self) -> super::CurrencyCode {
        super::CurrencyCode::from_code(&self.currency)
    }
}
