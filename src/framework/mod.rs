//! Generic building blocks for the store actors.
//!
//! Every stateful collection in the system (products, orders, tracking
//! records) is owned by a [`ResourceActor`]: a task that holds a map of
//! entities and processes requests sequentially off a channel. Because each
//! actor has exclusive ownership of its store, no locks are needed.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a store of entities
//! - [`ResourceClient`] - Type-safe sender half for talking to an actor
//! - [`snapshot::JsonStore`] - Optional file-backed persistence for a store
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;
pub mod snapshot;

// Re-export core types for convenience
pub use core::*;
pub use snapshot::JsonStore;
