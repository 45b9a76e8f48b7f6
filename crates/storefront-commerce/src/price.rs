//! Price type for monetary values.
//!
//! The storefront trades in Vietnamese đồng, which has no minor unit, so a
//! price is a whole number of đồng held in an `i64`. All arithmetic is checked
//! to keep totals exact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency symbol appended when displaying prices.
pub const CURRENCY_SYMBOL: &str = "đ";

/// A unit or total price in whole đồng.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "PriceRepr", into = "i64")]
pub struct Price(i64);

impl Price {
    /// The zero price.
    pub const ZERO: Price = Price(0);

    /// Create a price from a whole amount.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the whole amount.
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if this is positive.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Add another price, returning `None` on overflow.
    pub fn try_add(self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(self, factor: u32) -> Option<Price> {
        self.0.checked_mul(i64::from(factor)).map(Price)
    }

    /// Sum prices, returning `None` on overflow. An empty iterator sums to zero.
    pub fn try_sum<I>(iter: I) -> Option<Price>
    where
        I: IntoIterator<Item = Price>,
    {
        iter.into_iter()
            .try_fold(Price::ZERO, |acc, price| acc.try_add(price))
    }

    /// Format as a display string (e.g., "150000 đ").
    pub fn display(self) -> String {
        format!("{} {}", self.0, CURRENCY_SYMBOL)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> i64 {
        price.0
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

/// Wire shapes the catalog API uses for prices.
///
/// Decimal columns may arrive as `150000`, `150000.0` or `"150000.00"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Whole(i64),
    Fractional(f64),
    Text(String),
}

impl TryFrom<PriceRepr> for Price {
    type Error = String;

    fn try_from(repr: PriceRepr) -> Result<Self, Self::Error> {
        match repr {
            PriceRepr::Whole(amount) => Ok(Price(amount)),
            PriceRepr::Fractional(value) => whole_amount(value),
            PriceRepr::Text(text) => {
                let value: f64 = text
                    .trim()
                    .parse()
                    .map_err(|_| format!("invalid price {text:?}"))?;
                whole_amount(value)
            }
        }
    }
}

fn whole_amount(value: f64) -> Result<Price, String> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(format!("price {value} is not a whole amount"));
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return Err(format!("price {value} out of range"));
    }
    Ok(Price(value as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display() {
        assert_eq!(Price::new(150000).display(), "150000 đ");
        assert_eq!(format!("{}", Price::ZERO), "0 đ");
    }

    #[test]
    fn test_price_multiply() {
        assert_eq!(Price::new(10).try_multiply(3), Some(Price::new(30)));
        assert_eq!(Price::new(i64::MAX).try_multiply(2), None);
    }

    #[test]
    fn test_price_sum() {
        let prices = [Price::new(20), Price::new(15)];
        assert_eq!(Price::try_sum(prices), Some(Price::new(35)));
        assert_eq!(Price::try_sum(Vec::new()), Some(Price::ZERO));
        assert_eq!(Price::try_sum([Price::new(i64::MAX), Price::new(1)]), None);
    }

    #[test]
    fn test_price_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Price::new(100)).unwrap(), "100");
    }

    #[test]
    fn test_price_accepts_api_shapes() {
        let whole: Price = serde_json::from_str("100").unwrap();
        let float: Price = serde_json::from_str("100.0").unwrap();
        let text: Price = serde_json::from_str(r#""100.00""#).unwrap();

        assert_eq!(whole, Price::new(100));
        assert_eq!(float, Price::new(100));
        assert_eq!(text, Price::new(100));
    }

    #[test]
    fn test_price_rejects_fractional_amounts() {
        assert!(serde_json::from_str::<Price>("99.5").is_err());
        assert!(serde_json::from_str::<Price>(r#""abc""#).is_err());
    }
}
