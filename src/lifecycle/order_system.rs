use tracing::{error, info};

use crate::clients::{OrderClient, ProductClient, TrackingClient};
use crate::config::SystemConfig;
use crate::framework::JsonStore;
use crate::service::OrderService;

/// The main runtime orchestrator for the storefront's actor system.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Connecting actors that depend on each other (the
///   Order actor deducts stock through the Product client)
/// - **Persistence**: Attaching JSON snapshots when a data directory is set
///
/// # Architecture
///
/// Three actors run behind one service facade:
/// - **Product Actor**: The catalog, with stock levels
/// - **Order Actor**: Orders; deducts stock on creation via its injected `ProductClient`
/// - **Tracking Actor**: One delivery-tracking record per order, derived from elapsed time
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let order = system.service.place_order(&cart, address, Some(&user)).await?;
/// let tracking = system.service.get_order_tracking(order.id.clone()).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// The storefront facade most callers should use.
    pub service: OrderService,

    /// Client for interacting with the Order actor directly.
    pub order_client: OrderClient,

    /// Client for interacting with the Product actor directly.
    pub product_client: ProductClient,

    /// Client for interacting with the tracking actor directly.
    pub tracking_client: TrackingClient,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Creates and starts a system with the default configuration (in-memory,
    /// no simulated latency).
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Creates and initializes an `OrderSystem` with all actors running.
    ///
    /// 1. Creates the Product, Order and tracking actors
    /// 2. Attaches JSON snapshots when `config.data_dir` is set
    /// 3. Spawns each actor in its own Tokio task, injecting the Product
    ///    client into the Order actor's context
    /// 4. Wraps the clients in the [`OrderService`] facade
    pub fn with_config(config: SystemConfig) -> Self {
        let capacity = config.channel_capacity;
        let (mut product_actor, product_client) = crate::product_actor::new(capacity);
        let (mut order_actor, order_client) = crate::order_actor::new(capacity);
        let (mut tracking_actor, tracking_client) = crate::tracking_actor::new(capacity);

        if let Some(dir) = &config.data_dir {
            info!(data_dir = %dir.display(), "Snapshot persistence enabled");
            product_actor = product_actor.with_snapshot(JsonStore::new(dir.join("products.json")));
            order_actor = order_actor.with_snapshot(JsonStore::new(dir.join("orders.json")));
            tracking_actor = tracking_actor.with_snapshot(JsonStore::new(dir.join("tracking.json")));
        }

        // Product and tracking actors have no dependencies (Context = ()).
        // The Order actor deducts stock in on_create, so it gets the Product
        // client injected at run time.
        let product_handle = tokio::spawn(product_actor.run(()));
        let tracking_handle = tokio::spawn(tracking_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(product_client.clone()));

        let service = OrderService::new(
            order_client.clone(),
            product_client.clone(),
            tracking_client.clone(),
            config.simulated_latency,
        );

        Self {
            service,
            order_client,
            product_client,
            tracking_client,
            handles: vec![product_handle, tracking_handle, order_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops all clients, which closes the actors' channels; each
    /// `ResourceActor` detects the closed channel and exits its loop. Then
    /// waits for every actor task and reports any panic.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the clients closes the channel senders; the actors see
        // `None` from `recv` and exit.
        drop(self.service);
        drop(self.order_client);
        drop(self.product_client);
        drop(self.tracking_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
