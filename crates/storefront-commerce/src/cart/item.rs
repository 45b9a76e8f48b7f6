//! Cart line items.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A line quantity, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// The smallest allowed quantity.
    pub const ONE: Quantity = Quantity(1);

    /// Validate a raw quantity.
    pub fn new(value: i64) -> Result<Self, CommerceError> {
        if value < 1 {
            return Err(CommerceError::InvalidQuantity(value));
        }
        u32::try_from(value)
            .map(Quantity)
            .map_err(|_| CommerceError::Overflow)
    }

    /// Get the raw value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Add two quantities, returning `None` on overflow.
    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.0).map(Quantity)
    }

    /// One more unit, returning `None` on overflow.
    pub fn increment(self) -> Option<Quantity> {
        self.checked_add(Quantity::ONE)
    }

    /// One fewer unit, or `None` when already at the floor of one.
    pub fn decrement(self) -> Option<Quantity> {
        (self.0 > 1).then(|| Quantity(self.0 - 1))
    }
}

impl TryFrom<i64> for Quantity {
    type Error = CommerceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Quantity::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(qty: Quantity) -> u32 {
        qty.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One purchasable line in the cart.
///
/// `price` is the unit price captured when the line was first added; it is
/// never recomputed from the catalog afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Product identifier, unique within a cart.
    pub id: ProductId,
    /// Quantity.
    pub qty: Quantity,
    /// Relative image filename.
    pub image: String,
    /// Captured unit price.
    pub price: Price,
    /// Product name (denormalized for display).
    pub name: String,
}

impl CartItem {
    /// Create a new line item.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        image: impl Into<String>,
        price: Price,
        qty: Quantity,
    ) -> Self {
        Self {
            id: id.into(),
            qty,
            image: image.into(),
            price,
            name: name.into(),
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Price, CommerceError> {
        self.price
            .try_multiply(self.qty.get())
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_rejects_zero_and_negative() {
        assert!(matches!(Quantity::new(0), Err(CommerceError::InvalidQuantity(0))));
        assert!(matches!(Quantity::new(-3), Err(CommerceError::InvalidQuantity(-3))));
        assert_eq!(Quantity::new(2).unwrap().get(), 2);
    }

    #[test]
    fn test_quantity_decrement_floors_at_one() {
        let two = Quantity::new(2).unwrap();
        assert_eq!(two.decrement(), Some(Quantity::ONE));
        assert_eq!(Quantity::ONE.decrement(), None);
    }

    #[test]
    fn test_quantity_increment_overflow() {
        let max = Quantity::new(i64::from(u32::MAX)).unwrap();
        assert_eq!(max.increment(), None);
        assert!(matches!(
            Quantity::new(i64::from(u32::MAX) + 1),
            Err(CommerceError::Overflow)
        ));
    }

    #[test]
    fn test_cart_item_json_shape() {
        let item = CartItem::new(1, "Controller", "pad.png", Price::new(100), Quantity::ONE);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"qty":1,"image":"pad.png","price":100,"name":"Controller"}"#
        );
    }

    #[test]
    fn test_cart_item_rejects_zero_qty_on_decode() {
        let json = r#"{"id":1,"qty":0,"image":"","price":100,"name":"x"}"#;
        assert!(serde_json::from_str::<CartItem>(json).is_err());
    }

    #[test]
    fn test_line_total() {
        let item = CartItem::new(1, "x", "", Price::new(10), Quantity::new(2).unwrap());
        assert_eq!(item.line_total().unwrap(), Price::new(20));
    }
}
