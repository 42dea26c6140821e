//! Checkout and authentication error taxonomy.
//!
//! Every failure is recovered at the component boundary and surfaced to the
//! rendering layer as the single string this error displays as. Nothing here
//! is fatal: after any failure the submission can be retried by an explicit
//! user action.

use morsel_commerce::CommerceError;
use morsel_data::ApiError;
use thiserror::Error;

/// Why a submission attempt failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// No resolvable user identity; checkout requires one.
    #[error("please log in to continue")]
    Unauthenticated,

    /// No line item with a positive quantity and a resolvable product.
    #[error("no valid items in the cart")]
    EmptyCart,

    /// The network exchange could not complete.
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered, but rejected the submission. Carries the
    /// endpoint-supplied message when there was one, a generic fallback
    /// otherwise.
    #[error("{0}")]
    Rejected(String),
}

impl CheckoutError {
    /// True for failures raised before anything is sent: no network call
    /// happened, the cart and form state are untouched.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, CheckoutError::Unauthenticated | CheckoutError::EmptyCart)
    }
}

impl From<CommerceError> for CheckoutError {
    fn from(e: CommerceError) -> Self {
        match e {
            CommerceError::EmptyOrder => CheckoutError::EmptyCart,
            // Other assembly failures (overflow, mixed currencies) also stop
            // the attempt before submission; they carry their own message.
            other => CheckoutError::Rejected(other.to_string()),
        }
    }
}

impl From<ApiError> for CheckoutError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Http { message, .. } => CheckoutError::Rejected(message),
            other => CheckoutError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_user_facing_message() {
        assert_eq!(
            CheckoutError::Unauthenticated.to_string(),
            "please log in to continue"
        );
        assert_eq!(
            CheckoutError::Rejected("Invalid address".into()).to_string(),
            "Invalid address"
        );
    }

    #[test]
    fn test_validation_failures() {
        assert!(CheckoutError::Unauthenticated.is_validation_failure());
        assert!(CheckoutError::EmptyCart.is_validation_failure());
        assert!(!CheckoutError::Transport("down".into()).is_validation_failure());
    }

    #[test]
    fn test_empty_order_maps_to_empty_cart() {
        assert_eq!(
            CheckoutError::from(CommerceError::EmptyOrder),
            CheckoutError::EmptyCart
        );
    }
}
