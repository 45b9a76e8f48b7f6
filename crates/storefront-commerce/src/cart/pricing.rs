//! Cart totals.

use crate::cart::CartItem;
use crate::error::CommerceError;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// Sum of `price * qty` over `items`.
///
/// Pure function of the lines; an empty cart totals zero.
pub fn cart_total(items: &[CartItem]) -> Result<Price, CommerceError> {
    let lines = items
        .iter()
        .map(CartItem::line_total)
        .collect::<Result<Vec<_>, _>>()?;
    Price::try_sum(lines).ok_or(CommerceError::Overflow)
}

/// Display-ready breakdown of the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    /// One entry per cart line, in cart order.
    pub lines: Vec<CartLine>,
    /// Units across all lines.
    pub item_count: u64,
    /// Grand total.
    pub total: Price,
}

/// A cart line with its computed total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// The stored line, flattened into the serialized form.
    #[serde(flatten)]
    pub item: CartItem,
    /// Unit price times quantity.
    pub line_total: Price,
}

impl CartSummary {
    /// Compute the breakdown for `items`.
    pub fn from_items(items: &[CartItem]) -> Result<Self, CommerceError> {
        let lines = items
            .iter()
            .map(|item| {
                Ok(CartLine {
                    line_total: item.line_total()?,
                    item: item.clone(),
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;
        let total = Price::try_sum(lines.iter().map(|l| l.line_total))
            .ok_or(CommerceError::Overflow)?;
        let item_count = items.iter().map(|i| u64::from(i.qty.get())).sum();

        Ok(Self {
            lines,
            item_count,
            total,
        })
    }

    /// Check if the summary has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Quantity;

    fn item(id: i64, price: i64, qty: i64) -> CartItem {
        CartItem::new(id, "x", "", Price::new(price), Quantity::new(qty).unwrap())
    }

    #[test]
    fn test_empty_total_is_zero() {
        assert_eq!(cart_total(&[]).unwrap(), Price::ZERO);
    }

    #[test]
    fn test_total() {
        let items = [item(1, 10, 2), item(2, 5, 3)];
        assert_eq!(cart_total(&items).unwrap(), Price::new(35));
    }

    #[test]
    fn test_total_overflow() {
        let items = [item(1, i64::MAX, 1), item(2, 1, 1)];
        assert!(matches!(cart_total(&items), Err(CommerceError::Overflow)));
    }

    #[test]
    fn test_summary() {
        let summary = CartSummary::from_items(&[item(1, 50, 1), item(2, 30, 2)]).unwrap();

        assert_eq!(summary.lines[1].line_total, Price::new(60));
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.total, Price::new(110));
        assert!(!summary.is_empty());
    }
}
