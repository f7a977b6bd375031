//! Delivery-tracking state, derived from elapsed time.
//!
//! The actor owns one [`TrackingRecord`] per order, keyed by the order id
//! carried in the create payload (which is also what makes duplicate
//! initialization a clean reject instead of a silent overwrite).

pub mod derive;
pub mod entity;
pub mod error;

pub use entity::{Milestone, Milestones, TrackingAction, TrackingCreate, TrackingRecord};
pub use error::*;

use crate::clients::TrackingClient;
use crate::framework::ResourceActor;

/// Creates a new tracking actor and its client. Records are keyed by the
/// order id in the payload rather than a generated id.
pub fn new(buffer_size: usize) -> (ResourceActor<TrackingRecord>, TrackingClient) {
    let (actor, generic_client) =
        ResourceActor::new(buffer_size, |params: &TrackingCreate| params.order_id.clone());
    (actor, TrackingClient::new(generic_client))
}
