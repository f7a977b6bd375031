//! # Bazaar Core
//!
//! Order lifecycle and delivery-tracking engine for a small storefront,
//! built as a set of resource-oriented actors on Tokio.
//!
//! Each store (products, orders, tracking) is a `ResourceActor<T>` that owns
//! its state and processes messages sequentially, so no locks guard the data.
//! Domain rules live in `ActorEntity` hook implementations; everything above
//! them talks through typed clients.
//!
//! ## Module Tour
//!
//! ### The Engine ([`framework`])
//! The generic actor plumbing: [`ResourceActor`](framework::ResourceActor),
//! [`ActorEntity`](framework::ActorEntity), the mock client for tests, and
//! JSON snapshot persistence.
//!
//! ### The Domain ([`model`], [`zones`])
//! Plain data types (orders, products, identities, dashboard stats) and the
//! static delivery-zone table every shipment is estimated against.
//!
//! ### The Stores ([`product_actor`], [`order_actor`], [`tracking_actor`])
//! Concrete `ActorEntity` implementations. The Order actor deducts stock on
//! creation through an injected `ProductClient`; the tracking actor derives
//! each record's status and progress from elapsed time, and never moves a
//! status backwards.
//!
//! ### The Interface ([`clients`], [`service`])
//! Typed clients hide raw message passing; [`OrderService`](service::OrderService)
//! composes them into storefront operations: checkout, order history,
//! tracking lookups, admin overrides and the dashboard.
//!
//! ### The Orchestrator ([`lifecycle`], [`config`])
//! [`OrderSystem`](lifecycle::OrderSystem) spins everything up, wires the
//! cross-actor dependency, and shuts it all down gracefully.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod service;
pub mod tracking_actor;
pub mod zones;
