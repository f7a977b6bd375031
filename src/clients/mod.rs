//! Type-safe clients wrapping the generic actor channels.
//!
//! The rest of the crate never touches raw message passing; each store gets a
//! domain client that exposes named operations and maps framework errors into
//! the store's own error type.

pub mod actor_client;
pub mod order_client;
pub mod product_client;
pub mod tracking_client;

pub use actor_client::ActorClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use tracking_client::TrackingClient;
