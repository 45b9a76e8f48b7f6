//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and catalog operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Quantity below the minimum of one.
    #[error("Quantity must be at least 1 (got {0})")]
    InvalidQuantity(i64),

    /// Input that could not be interpreted.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Operation needs at least one line in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,

    /// Persistence failure.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CommerceError {
    /// Message suitable for showing to the shopper.
    pub fn user_message(&self) -> String {
        match self {
            CommerceError::InvalidQuantity(_) | CommerceError::ValidationError(_) => {
                "Quantity must be at least 1".to_string()
            }
            CommerceError::EmptyCart => "Your cart is empty".to_string(),
            _ => "Something went wrong, please try again".to_string(),
        }
    }
}

impl From<storefront_cache::CacheError> for CommerceError {
    fn from(e: storefront_cache::CacheError) -> Self {
        CommerceError::StorageError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
