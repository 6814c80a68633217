//! # Currency Module
//!
//! Two-currency price display for the storefront.
//!
//! ## How Pricing Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Canonical prices are stored in USD (the base currency).               │
//! │  Each catalog row carries its own USD→GHS exchange rate, captured by   │
//! │  the admin when the product was priced. The shopper toggles between    │
//! │  the two display currencies; the toggle never changes stored amounts.  │
//! │                                                                         │
//! │  price_cents (USD) ──┬── Currency::Usd ──► "$100.00"                   │
//! │                      │                                                  │
//! │                      └── Currency::Ghs ──► × rate ──► "GH₵1,500.00"    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Policy
//! Both currencies always render with two decimal places and thousands
//! separators. Conversion rounds half-up on the cent.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::LOCAL_CURRENCY_SYMBOL;

// =============================================================================
// Currency
// =============================================================================

/// The two display currencies supported by the storefront.
///
/// The base currency (USD) is what catalog prices and order totals are stored
/// in; the local currency (GHS) is derived per item via [`ExchangeRate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Ghana cedi - the local display currency, and the default.
    #[default]
    Ghs,
    /// US dollar - the base currency prices are stored in.
    Usd,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Ghs => write!(f, "GHS"),
            Currency::Usd => write!(f, "USD"),
        }
    }
}

// =============================================================================
// Exchange Rate
// =============================================================================

/// Base→local exchange rate in fixed-point, scaled by 10,000.
///
/// ## Why Fixed-Point?
/// A rate of 15.3 becomes 153,000. Multiplying cent amounts by an integer
/// rate keeps conversion exact up to the final half-up rounding, with no
/// float drift on large totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExchangeRate(u32);

/// Fixed-point scale for [`ExchangeRate`] (1.0 == 10,000).
const RATE_SCALE: i128 = 10_000;

impl ExchangeRate {
    /// Creates an exchange rate from its scaled integer form (rate × 10,000).
    #[inline]
    pub const fn from_scaled(scaled: u32) -> Self {
        ExchangeRate(scaled)
    }

    /// Creates an exchange rate from a decimal multiplier (for the remote
    /// boundary - catalog rows store the rate as a decimal number).
    pub fn from_rate(rate: f64) -> Self {
        ExchangeRate((rate * RATE_SCALE as f64).round() as u32)
    }

    /// Returns the scaled integer form.
    #[inline]
    pub const fn scaled(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a decimal multiplier (for display/serialization).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.0 as f64 / RATE_SCALE as f64
    }

    /// Identity rate (1.0).
    #[inline]
    pub const fn identity() -> Self {
        ExchangeRate(RATE_SCALE as u32)
    }

    /// Converts a base-currency amount to local-currency cents.
    ///
    /// Uses i128 to avoid overflow, rounding half-up on the cent.
    ///
    /// ## Example
    /// ```rust
    /// use atelier_core::currency::ExchangeRate;
    /// use atelier_core::money::Money;
    ///
    /// let rate = ExchangeRate::from_rate(15.0);
    /// let usd = Money::from_cents(10_000); // $100.00
    /// assert_eq!(rate.convert(usd).cents(), 150_000); // GH₵1,500.00
    /// ```
    pub fn convert(&self, amount: Money) -> Money {
        let local = (amount.cents() as i128 * self.0 as i128 + RATE_SCALE / 2) / RATE_SCALE;
        Money::from_cents(local as i64)
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        ExchangeRate::from_rate(crate::DEFAULT_EXCHANGE_RATE)
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a base-currency amount for display in the selected currency.
///
/// - [`Currency::Ghs`]: converts via `rate`, renders `GH₵1,500.00`
/// - [`Currency::Usd`]: renders the amount directly, `$100.00`
///
/// Both forms use thousands separators and two decimal places.
pub fn format_price(amount: Money, rate: ExchangeRate, currency: Currency) -> String {
    match currency {
        Currency::Ghs => {
            let local = rate.convert(amount);
            format!("{}{}", LOCAL_CURRENCY_SYMBOL, format_amount(local))
        }
        Currency::Usd => format!("${}", format_amount(amount)),
    }
}

/// Renders cents as `1,234.56` (no symbol). Negative amounts carry a
/// leading minus before the digits.
fn format_amount(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{}{}.{:02}",
        sign,
        group_thousands(amount.dollars().abs()),
        amount.cents_part()
    )
}

/// Inserts comma separators into a non-negative integer: 1500 → "1,500".
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_fixed_point_round_trip() {
        let rate = ExchangeRate::from_rate(15.3);
        assert_eq!(rate.scaled(), 153_000);
        assert!((rate.rate() - 15.3).abs() < 1e-9);
    }

    #[test]
    fn test_convert_whole_rate() {
        let rate = ExchangeRate::from_rate(15.0);
        assert_eq!(rate.convert(Money::from_cents(10_000)).cents(), 150_000);
    }

    #[test]
    fn test_convert_rounds_half_up() {
        // $0.01 at rate 15.55 = 15.55 local cents → 16
        let rate = ExchangeRate::from_rate(15.55);
        assert_eq!(rate.convert(Money::from_cents(1)).cents(), 16);
    }

    #[test]
    fn test_identity_rate() {
        let amount = Money::from_cents(12_345);
        assert_eq!(ExchangeRate::identity().convert(amount), amount);
    }

    #[test]
    fn test_format_local_currency() {
        // amount=100, rate=15 → GH₵1,500.00
        let price = format_price(
            Money::from_cents(10_000),
            ExchangeRate::from_rate(15.0),
            Currency::Ghs,
        );
        assert_eq!(price, "GH₵1,500.00");
    }

    #[test]
    fn test_format_usd_ignores_rate() {
        let price = format_price(
            Money::from_cents(10_000),
            ExchangeRate::from_rate(15.0),
            Currency::Usd,
        );
        assert_eq!(price, "$100.00");
    }

    #[test]
    fn test_format_thousands_grouping() {
        let price = format_price(
            Money::from_cents(123_456_789), // $1,234,567.89
            ExchangeRate::identity(),
            Currency::Usd,
        );
        assert_eq!(price, "$1,234,567.89");
    }

    #[test]
    fn test_format_small_amounts_ungrouped() {
        let price = format_price(
            Money::from_cents(999),
            ExchangeRate::identity(),
            Currency::Ghs,
        );
        assert_eq!(price, "GH₵9.99");
    }

    #[test]
    fn test_default_currency_is_local() {
        assert_eq!(Currency::default(), Currency::Ghs);
    }

    #[test]
    fn test_currency_serde_uppercase() {
        assert_eq!(serde_json::to_string(&Currency::Ghs).unwrap(), "\"GHS\"");
        assert_eq!(
            serde_json::from_str::<Currency>("\"USD\"").unwrap(),
            Currency::Usd
        );
    }
}
