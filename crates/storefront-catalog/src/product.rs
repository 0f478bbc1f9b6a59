//! Product records and their display helpers.

use serde::{Deserialize, Serialize};

/// One catalog entry. Field names match the JSON the product API returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score on a 0-5 scale.
    pub rate: f64,
    /// Number of reviews.
    pub count: u32,
}

impl Product {
    /// Price formatted as US dollars.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }

    pub fn stars(&self) -> StarBreakdown {
        StarBreakdown::from_rate(self.rating.rate)
    }
}

/// Formats an amount as US dollars with thousands separators.
///
/// ```rust
/// use storefront_catalog::format_price;
///
/// assert_eq!(format_price(1299.99), "$1,299.99");
/// assert_eq!(format_price(29.9), "$29.90");
/// assert_eq!(format_price(0.0), "$0.00");
/// ```
pub fn format_price(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

/// Five-star rendering of a rating.
///
/// Full stars are the integer part, a fractional part earns one half star,
/// and the rest of the five are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarBreakdown {
    pub const MAX: u8 = 5;

    /// Splits `rate` into stars. Out-of-range rates are clamped to 0-5.
    pub fn from_rate(rate: f64) -> Self {
        let rate = if rate.is_nan() {
            0.0
        } else {
            rate.clamp(0.0, f64::from(Self::MAX))
        };
        let full = rate.floor() as u8;
        let half = rate.fract() != 0.0;
        let empty = Self::MAX - rate.ceil() as u8;
        Self { full, half, empty }
    }
}
