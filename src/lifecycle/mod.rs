//! Runtime orchestration and lifecycle management.
//!
//! This module spins up the actor system and wires its dependencies:
//!
//! - **Actor lifecycle management**: Starting, wiring, and shutting down actors
//! - **System orchestration**: Injecting cross-actor dependencies at `run` time
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`OrderSystem`] - The primary orchestrator that manages all actors and their dependencies
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use self::tracing::setup_tracing;
