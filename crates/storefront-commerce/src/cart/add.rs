//! Add-to-cart contract between the product page and the cart.

use crate::cart::{CartItem, CartRepository, CartStore, Quantity};
use crate::catalog::Product;
use crate::error::CommerceError;

/// Parse the quantity a shopper typed.
///
/// Surrounding whitespace is ignored. Text that is not a whole number, or a
/// number below one, is rejected and the cart is left untouched.
///
/// ```
/// use storefront_commerce::cart::parse_quantity;
///
/// assert_eq!(parse_quantity(" 3 ").unwrap().get(), 3);
/// assert!(parse_quantity("0").is_err());
/// assert!(parse_quantity("two").is_err());
/// ```
pub fn parse_quantity(input: &str) -> Result<Quantity, CommerceError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        CommerceError::ValidationError(format!("quantity {trimmed:?} is not a whole number"))
    })?;
    Quantity::new(value)
}

/// A request to put `qty` units of a product in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct AddToCart {
    item: CartItem,
}

impl AddToCart {
    /// Capture the product's current effective price as the line price.
    pub fn new(product: &Product, qty: Quantity) -> Self {
        Self {
            item: CartItem::new(
                product.id,
                product.name.clone(),
                product.image.clone(),
                product.effective_price(),
                qty,
            ),
        }
    }

    /// The line this request adds.
    pub fn item(&self) -> &CartItem {
        &self.item
    }

    /// Consume the request, yielding the line.
    pub fn into_item(self) -> CartItem {
        self.item
    }

    /// Hand the line to `store`, merging with an existing line.
    pub fn apply<R: CartRepository>(self, store: &mut CartStore<R>) -> Result<(), CommerceError> {
        tracing::info!(product = %self.item.id, qty = %self.item.qty, "adding to cart");
        store.add_item(self.item)
    }
}
