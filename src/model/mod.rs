//! Pure data structures for the storefront domain.
//!
//! These types carry no behavior beyond constructors and small predicates;
//! store semantics live in the actor modules and orchestration in
//! [`crate::service`].

pub mod order;
pub mod product;
pub mod stats;
pub mod user;

pub use order::*;
pub use product::*;
pub use stats::*;
pub use user::*;
