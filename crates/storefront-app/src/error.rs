//! Error types for screen actions.

use storefront_commerce::CommerceError;
use storefront_data::FetchError;
use thiserror::Error;

/// Errors a screen action can return.
#[derive(Error, Debug)]
pub enum AppError {
    /// Cart rule or persistence failure.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Catalog or account request failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The screen is not mounted.
    #[error("Screen is not mounted")]
    NotMounted,

    /// A timer period of zero.
    #[error("Autoplay period must be greater than zero")]
    ZeroPeriod,

    /// The action needs data that has not loaded yet.
    #[error("{0} has not loaded")]
    NotLoaded(&'static str),
}

impl AppError {
    /// A message suitable for showing the shopper.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Commerce(e) => e.user_message(),
            AppError::Fetch(_) => "Could not reach the store. Please try again.".to_string(),
            AppError::NotMounted | AppError::NotLoaded(_) => "Please wait a moment.".to_string(),
            AppError::ZeroPeriod => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = AppError::from(CommerceError::InvalidQuantity(0));
        assert_eq!(err.user_message(), "Quantity must be at least 1");

        let err = AppError::from(FetchError::RequestError("refused".into()));
        assert!(err.user_message().contains("try again"));
    }
}
