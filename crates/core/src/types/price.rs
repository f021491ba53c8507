//! Currency codes and locale-aware money formatting.
//!
//! Prices arrive from WooCommerce as decimal strings (`"19.99"`). Display
//! formatting follows the `en-CA` locale: the home currency (CAD) renders with
//! a bare `$`, foreign dollars are disambiguated (`US$`, `A$`), and codes
//! without a known symbol fall back to the ISO code.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Non-breaking space used between an ISO code and the amount.
const NBSP: char = '\u{a0}';

/// ISO 4217 currency codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CurrencyCode {
    #[default]
    CAD,
    USD,
    EUR,
    GBP,
    AUD,
    JPY,
    /// Any other ISO code, stored upper-cased.
    Other(String),
}

impl CurrencyCode {
    /// Resolve an ISO code (case-insensitive).
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let upper = code.trim().to_ascii_uppercase();
        match upper.as_str() {
            "CAD" => Self::CAD,
            "USD" => Self::USD,
            "EUR" => Self::EUR,
            "GBP" => Self::GBP,
            "AUD" => Self::AUD,
            "JPY" => Self::JPY,
            _ => Self::Other(upper),
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::CAD => "CAD",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::AUD => "AUD",
            Self::JPY => "JPY",
            Self::Other(code) => code,
        }
    }

    /// Symbol used by the `en-CA` locale, if the currency has one.
    #[must_use]
    pub const fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::CAD => Some("$"),
            Self::USD => Some("US$"),
            Self::EUR => Some("€"),
            Self::GBP => Some("£"),
            Self::AUD => Some("A$"),
            Self::JPY => Some("JP¥"),
            Self::Other(_) => None,
        }
    }

    /// Number of minor-unit digits shown.
    #[must_use]
    pub const fn fraction_digits(&self) -> u32 {
        match self {
            Self::JPY => 0,
            _ => 2,
        }
    }

    /// Format an amount, e.g. `1234.5` CAD → `$1,234.50`.
    ///
    /// Rounds half away from zero to the currency's minor unit and groups
    /// thousands with commas.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let digits = self.fraction_digits();
        let rounded = amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let plain = format!("{:.*}", digits as usize, rounded.abs());
        let (whole, fraction) = plain
            .split_once('.')
            .map_or((plain.as_str(), None), |(w, f)| (w, Some(f)));

        self.assemble(negative, whole, fraction)
    }

    /// Format an amount too large for `Decimal`.
    ///
    /// Finite `f64` values beyond the `Decimal` range are whole numbers, so
    /// the fraction is all zeros. Returns `None` for NaN and infinities.
    #[must_use]
    pub fn format_wide(&self, amount: f64) -> Option<String> {
        if !amount.is_finite() {
            return None;
        }
        let whole = format!("{}", amount.abs().trunc());
        let zeros = "0".repeat(self.fraction_digits() as usize);
        let fraction = (!zeros.is_empty()).then_some(zeros.as_str());
        let negative = amount.is_sign_negative() && whole != "0";
        Some(self.assemble(negative, &whole, fraction))
    }

    fn assemble(&self, negative: bool, whole: &str, fraction: Option<&str>) -> String {
        let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 8);
        if negative {
            out.push('-');
        }
        match self.symbol() {
            Some(symbol) => out.push_str(symbol),
            None => {
                out.push_str(self.code());
                out.push(NBSP);
            }
        }
        out.push_str(&group_thousands(whole));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

/// Insert `,` separators every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
