//! Money and platform price data.
//!
//! The platform sends prices as decimals alongside pre-formatted display
//! strings. Display strings are shown as-is; `Money` is only used where the
//! storefront has to format an amount itself (e.g. "from $10.00" on cards).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    CHF,
    INR,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::CHF => "CHF",
            Currency::INR => "INR",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
            Currency::CHF => "CHF",
            Currency::INR => "\u{20b9}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "CHF" => Some(Currency::CHF),
            "INR" => Some(Currency::INR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use storefront_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a decimal amount in the given platform currency code.
///
/// Unknown codes fall back to `"12.50 XYZ"`.
pub fn format_amount(amount: f64, currency_code: Option<&str>) -> String {
    let code = currency_code.unwrap_or(Currency::default().code());
    match Currency::from_code(code) {
        Some(currency) => Money::from_decimal(amount, currency).display(),
        None => format!("{:.2} {}", amount, code),
    }
}

/// Pre-formatted price strings supplied by the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedPrice {
    /// Regular price (e.g., "$25.00").
    #[serde(default)]
    pub price: Option<String>,
    /// Price after discount.
    #[serde(default)]
    pub discounted_price: Option<String>,
}

/// Price data attached to a product or variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceData {
    /// Currency code (e.g., "USD").
    #[serde(default)]
    pub currency: Option<String>,
    /// Regular price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Price after discount; equal to `price` when there is no discount.
    #[serde(default)]
    pub discounted_price: Option<f64>,
    /// Display strings.
    #[serde(default)]
    pub formatted: Option<FormattedPrice>,
}

impl PriceData {
    /// Whether the discounted price differs from the regular price.
    pub fn has_discount(&self) -> bool {
        self.discounted_price != self.price
    }

    /// Formatted regular price, formatting it locally if the platform sent none.
    pub fn formatted_price(&self) -> Option<String> {
        self.formatted
            .as_ref()
            .and_then(|f| f.price.clone())
            .or_else(|| {
                self.price
                    .map(|p| format_amount(p, self.currency.as_deref()))
            })
    }

    /// Formatted discounted price, formatting it locally if the platform sent none.
    pub fn formatted_discounted_price(&self) -> Option<String> {
        self.formatted
            .as_ref()
            .and_then(|f| f.discounted_price.clone())
            .or_else(|| {
                self.discounted_price
                    .map(|p| format_amount(p, self.currency.as_deref()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_cents, 4999);

        let m = Money::from_decimal(100.0, Currency::JPY);
        assert_eq!(m.amount_cents, 100); // JPY has no decimals
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");

        let m = Money::new(100, Currency::JPY);
        assert_eq!(m.display(), "\u{00a5}100");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }

    #[test]
    fn test_format_amount_unknown_currency() {
        assert_eq!(format_amount(12.5, Some("USD")), "$12.50");
        assert_eq!(format_amount(12.5, Some("XYZ")), "12.50 XYZ");
        assert_eq!(format_amount(3.0, None), "$3.00");
    }

    #[test]
    fn test_price_data_discount() {
        let mut data = PriceData {
            currency: Some("USD".into()),
            price: Some(25.0),
            discounted_price: Some(25.0),
            formatted: None,
        };
        assert!(!data.has_discount());

        data.discounted_price = Some(20.0);
        assert!(data.has_discount());
        assert_eq!(data.formatted_discounted_price().as_deref(), Some("$20.00"));
    }

    #[test]
    fn test_price_data_prefers_platform_strings() {
        let data: PriceData = serde_json::from_str(
            r#"{"currency":"USD","price":25,"discountedPrice":25,
                "formatted":{"price":"25,00 $","discountedPrice":"25,00 $"}}"#,
        )
        .unwrap();
        assert_eq!(data.formatted_price().as_deref(), Some("25,00 $"));
    }
}
