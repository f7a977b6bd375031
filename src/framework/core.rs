//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the store actors.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: the trait that all resource types must implement.
//! - [`ResourceActor`]: the generic actor that manages entities.
//! - [`ResourceClient`]: the generic client for communicating with actors.
//! - [`FrameworkError`]: common errors (e.g. ActorClosed, NotFound, Duplicate).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use super::snapshot::JsonStore;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any resource entity must implement to be managed by a
/// [`ResourceActor`].
///
/// # Architecture Note
/// By defining a contract that all our resource types (Product, Order,
/// TrackingRecord) must satisfy, the `ResourceActor` loop is written *once*
/// and reused everywhere. Associated types enforce payload safety: an Order
/// actor cannot be sent a Product payload.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so an entity may call other actors while it is
/// being created or mutated. The `Context` type is injected into every hook at
/// `run()` time ("late binding"), which is how the order store reaches the
/// product store to deduct stock.
///
/// # Serde Bounds
/// Entities and their ids must round-trip through serde so a store can be
/// snapshotted to disk (see [`JsonStore`]). Payload and action types carry no
/// such requirement.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + Serialize + DeserializeOwned;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `DeductStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Construct the full entity from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, String>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is constructed, before it is
    /// inserted into the store. Use this hook for side effects against other
    /// actors; an error here aborts the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(&mut self, update: Self::Update, _ctx: &Self::Context) -> Result<(), String>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    Duplicate(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the standard lifecycle of a stored resource
/// (create, read, list, update, delete) plus an `Action` variant for
/// resource-specific logic that does not fit that model: stock deduction,
/// tracking refreshes, status overrides.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// This struct is the "server" half of the actor: it owns the state (`store`)
/// and the receiver end of the channel. Messages are processed sequentially,
/// so the store needs no lock.
///
/// # Id Derivation
/// `next_id_fn` receives the create payload, which lets a store either mint
/// fresh ids (orders, products) or key entities by an id carried in the
/// payload (tracking records are keyed by their order id). Creating an entity
/// under an id that already exists is rejected with
/// [`FrameworkError::Duplicate`] and leaves the stored entity untouched.
///
/// # Persistence
/// A store is in-memory by default. [`ResourceActor::with_snapshot`] attaches
/// a [`JsonStore`]: the store is loaded from the snapshot at startup and
/// rewritten after every successful mutation. Snapshot write failures are
/// logged and never fail the operation.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn(&T::Create) -> T::Id + Send + Sync>,
    snapshot: Option<JsonStore<T>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn(&T::Create) -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
            snapshot: None,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Attaches a file-backed snapshot and loads any previously stored
    /// entities. A missing file starts an empty store; an unreadable one is
    /// logged and ignored.
    pub fn with_snapshot(mut self, snapshot: JsonStore<T>) -> Self {
        match snapshot.load() {
            Ok(entities) => {
                self.store = entities;
            }
            Err(e) => {
                warn!(path = %snapshot.path().display(), error = %e, "Snapshot load failed, starting empty");
            }
        }
        self.snapshot = Some(snapshot);
        self
    }

    fn persist(&self, entity_type: &str) {
        if let Some(snapshot) = &self.snapshot {
            if let Err(e) = snapshot.save(&self.store) {
                warn!(entity_type, error = %e, "Snapshot write failed");
            }
        }
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows
    /// entities to access external dependencies (like other clients) that were
    /// created *after* the actor was instantiated but *before* the loop
    /// started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g. "Order" instead of "bazaar_core::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)(&params);

                    if self.store.contains_key(&id) {
                        warn!(entity_type, %id, "Duplicate create rejected");
                        let _ = respond_to.send(Err(FrameworkError::Duplicate(id.to_string())));
                        continue;
                    }

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            self.persist(entity_type);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        let updated = item.clone();
                        self.persist(entity_type);
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(updated));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        self.store.remove(&id);
                        self.persist(entity_type);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(FrameworkError::Custom);
                        match &result {
                            Ok(_) => {
                                self.persist(entity_type);
                                info!(entity_type, %id, "Action ok");
                            }
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update { id, update, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action { id, action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Counter {
        id: String,
        label: String,
        count: i64,
    }

    #[derive(Debug)]
    struct CounterCreate {
        label: String,
    }

    #[derive(Debug)]
    struct CounterUpdate {
        label: Option<String>,
    }

    #[derive(Debug)]
    enum CounterAction {
        Increment(i64),
    }

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = String;
        type Create = CounterCreate;
        type Update = CounterUpdate;
        type Action = CounterAction;
        type ActionResult = i64;
        type Context = ();

        fn from_create_params(id: String, params: CounterCreate) -> Result<Self, String> {
            Ok(Self {
                id,
                label: params.label,
                count: 0,
            })
        }

        async fn on_update(&mut self, update: CounterUpdate, _ctx: &()) -> Result<(), String> {
            if let Some(label) = update.label {
                self.label = label;
            }
            Ok(())
        }

        async fn handle_action(&mut self, action: CounterAction, _ctx: &()) -> Result<i64, String> {
            match action {
                CounterAction::Increment(by) => {
                    self.count += by;
                    Ok(self.count)
                }
            }
        }
    }

    fn sequential_ids() -> impl Fn(&CounterCreate) -> String + Send + Sync {
        let seq = Arc::new(AtomicU64::new(1));
        move |_params| format!("counter_{}", seq.fetch_add(1, Ordering::SeqCst))
    }

    #[tokio::test]
    async fn crud_and_actions_round_trip() {
        let (actor, client) = ResourceActor::<Counter>::new(10, sequential_ids());
        tokio::spawn(actor.run(()));

        let id = client
            .create(CounterCreate { label: "hits".into() })
            .await
            .unwrap();
        assert_eq!(id, "counter_1");

        let total = client
            .perform_action(id.clone(), CounterAction::Increment(3))
            .await
            .unwrap();
        assert_eq!(total, 3);

        let updated = client
            .update(id.clone(), CounterUpdate { label: Some("misses".into()) })
            .await
            .unwrap();
        assert_eq!(updated.label, "misses");

        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 1);

        client.delete(id.clone()).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_with_existing_id_is_rejected() {
        // Id derived from the payload, so two creates with the same label collide.
        let (actor, client) =
            ResourceActor::<Counter>::new(10, |params: &CounterCreate| params.label.clone());
        tokio::spawn(actor.run(()));

        let id = client
            .create(CounterCreate { label: "slot".into() })
            .await
            .unwrap();
        client
            .perform_action(id.clone(), CounterAction::Increment(7))
            .await
            .unwrap();

        let second = client.create(CounterCreate { label: "slot".into() }).await;
        assert_eq!(second, Err(FrameworkError::Duplicate("slot".into())));

        // First entity is untouched.
        let stored = client.get(id).await.unwrap().unwrap();
        assert_eq!(stored.count, 7);
    }

    #[tokio::test]
    async fn missing_entity_reports_not_found() {
        let (actor, client) = ResourceActor::<Counter>::new(10, sequential_ids());
        tokio::spawn(actor.run(()));

        let result = client
            .perform_action("counter_404".to_string(), CounterAction::Increment(1))
            .await;
        assert_eq!(result, Err(FrameworkError::NotFound("counter_404".into())));
    }
}
