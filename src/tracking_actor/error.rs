//! Error types for the tracking actor.

use thiserror::Error;

/// Errors that can occur during tracking operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrackingError {
    /// No tracking record exists for the given order.
    #[error("No tracking for order: {0}")]
    NotFound(String),

    /// Tracking was already initialized for this order.
    #[error("Tracking already exists for order: {0}")]
    AlreadyTracked(String),

    /// An error occurred while communicating with the actor system.
    #[error("Tracking actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for TrackingError {
    fn from(msg: String) -> Self {
        TrackingError::ActorCommunicationError(msg)
    }
}
