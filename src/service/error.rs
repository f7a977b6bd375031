//! Error type for the storefront service facade.

use thiserror::Error;

use crate::model::{OrderId, ProductId};

/// Errors surfaced to callers of [`OrderService`](super::OrderService).
///
/// Checkout validation failures are individually distinguishable so a UI can
/// point at the offending field; everything downstream of validation folds
/// into [`ServiceError::Internal`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// Checkout requires a signed-in user.
    #[error("Please sign in to continue")]
    NotSignedIn,

    /// The submitted cart has no items.
    #[error("Cart is empty")]
    EmptyCart,

    /// A required shipping address field is blank.
    #[error("Missing shipping address field: {0}")]
    MissingAddressField(&'static str),

    /// The cart references a product that is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// No such order (or not visible to the requesting user).
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// An actor-layer failure the caller cannot do anything about.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<crate::order_actor::OrderError> for ServiceError {
    fn from(e: crate::order_actor::OrderError) -> Self {
        ServiceError::Internal(e.to_string())
    }
}

impl From<crate::product_actor::ProductError> for ServiceError {
    fn from(e: crate::product_actor::ProductError) -> Self {
        ServiceError::Internal(e.to_string())
    }
}

impl From<crate::tracking_actor::TrackingError> for ServiceError {
    fn from(e: crate::tracking_actor::TrackingError) -> Self {
        ServiceError::Internal(e.to_string())
    }
}
