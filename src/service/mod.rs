//! Storefront service facade.
//!
//! [`OrderService`] is what a UI or API layer talks to. It owns one client per
//! actor and composes them into the storefront operations: checkout, order
//! history, tracking lookups, admin overrides and the dashboard. Validation
//! and visibility rules live here; the actors below it only know their own
//! entity.

pub mod error;

pub use error::ServiceError;

use std::time::Duration;

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::clients::{ActorClient, OrderClient, ProductClient, TrackingClient};
use crate::model::{
    CartItem, DashboardStats, Order, OrderCreate, OrderId, OrderItem, OrderStatus,
    ShippingAddress, User,
};
use crate::tracking_actor::{TrackingCreate, TrackingRecord};
use crate::zones::{Warehouse, Zone, WAREHOUSE, ZONES};

/// The storefront's single entry point over the actor system.
#[derive(Clone)]
pub struct OrderService {
    orders: OrderClient,
    products: ProductClient,
    tracking: TrackingClient,
    simulated_latency: Option<Duration>,
}

impl OrderService {
    pub fn new(
        orders: OrderClient,
        products: ProductClient,
        tracking: TrackingClient,
        simulated_latency: Option<Duration>,
    ) -> Self {
        Self {
            orders,
            products,
            tracking,
            simulated_latency,
        }
    }

    /// Optional artificial delay so the demo behaves like a remote backend.
    async fn pause(&self) {
        if let Some(latency) = self.simulated_latency {
            tokio::time::sleep(latency).await;
        }
    }

    /// Places an order from a shopping cart.
    ///
    /// Validates the session, cart and address, snapshots each product's name
    /// and price into the order lines, computes the total, persists the order
    /// (which deducts stock), then initializes delivery tracking. Tracking
    /// initialization is best-effort: a failure there is logged and the order
    /// still stands.
    #[instrument(skip(self, cart, address), fields(user_id = tracing::field::Empty))]
    pub async fn place_order(
        &self,
        cart: &[CartItem],
        address: ShippingAddress,
        current_user: Option<&User>,
    ) -> Result<Order, ServiceError> {
        self.pause().await;

        let user = current_user.ok_or(ServiceError::NotSignedIn)?;
        tracing::Span::current().record("user_id", user.id.as_str());

        if cart.is_empty() {
            return Err(ServiceError::EmptyCart);
        }
        if let Some(field) = address.first_missing_field() {
            return Err(ServiceError::MissingAddressField(field));
        }

        let mut items = Vec::with_capacity(cart.len());
        for line in cart {
            let product = self
                .products
                .get(line.product_id.clone())
                .await?
                .ok_or_else(|| ServiceError::UnknownProduct(line.product_id.clone()))?;
            items.push(OrderItem {
                product_id: product.id,
                quantity: line.quantity,
                price: product.price,
                name: product.name,
            });
        }
        let total: f64 = items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum();

        let created_at = Utc::now();
        let destination_city = address.city.clone();
        let order_id = self
            .orders
            .place_order(OrderCreate {
                user_id: user.id.clone(),
                items,
                total,
                created_at,
                shipping_address: address,
            })
            .await?;

        let order = self
            .orders
            .get(order_id.clone())
            .await?
            .ok_or_else(|| ServiceError::Internal(format!("order {order_id} vanished after create")))?;

        // Best-effort: the order is already committed at this point.
        if let Err(e) = self
            .tracking
            .create_tracking(TrackingCreate {
                order_id: order_id.clone(),
                placed_at: created_at,
                destination_city,
            })
            .await
        {
            warn!(order_id = %order_id, error = %e, "Tracking initialization failed");
        }

        info!(order_id = %order_id, total, "Order placed");
        Ok(order)
    }

    /// Lists orders visible to `user`, newest first. Admins see every order,
    /// customers only their own.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn get_orders(&self, user: &User) -> Result<Vec<Order>, ServiceError> {
        self.pause().await;

        let mut orders = self.orders.list().await?;
        if !user.is_admin() {
            orders.retain(|order| order.user_id == user.id);
        }
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    /// Fetches a single order, subject to the same visibility rule as
    /// [`get_orders`](Self::get_orders).
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn get_order(&self, id: OrderId, user: &User) -> Result<Order, ServiceError> {
        self.pause().await;

        let order = self
            .orders
            .get(id.clone())
            .await?
            .filter(|order| user.is_admin() || order.user_id == user.id)
            .ok_or(ServiceError::OrderNotFound(id))?;
        Ok(order)
    }

    /// Returns the current tracking state for an order, re-derived from
    /// elapsed time, or `None` when the order has no tracking record.
    #[instrument(skip(self))]
    pub async fn get_order_tracking(
        &self,
        order_id: OrderId,
    ) -> Result<Option<TrackingRecord>, ServiceError> {
        self.pause().await;

        Ok(self.tracking.refresh(order_id, Utc::now()).await?)
    }

    /// Admin override: advances an order's status and mirrors the change into
    /// its tracking record. Regressions are ignored by both stores. A missing
    /// tracking record is logged, not fatal; the order is authoritative.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ServiceError> {
        self.pause().await;

        let order = self
            .orders
            .set_status(order_id.clone(), status)
            .await
            .map_err(|e| match e {
                crate::order_actor::OrderError::NotFound(_) => {
                    ServiceError::OrderNotFound(order_id.clone())
                }
                other => ServiceError::Internal(other.to_string()),
            })?;

        if let Err(e) = self
            .tracking
            .set_status(order.id.clone(), status, Utc::now())
            .await
        {
            warn!(order_id = %order.id, error = %e, "Tracking status update failed");
        }

        Ok(order)
    }

    /// The warehouse every order ships from.
    pub fn warehouse_info(&self) -> &'static Warehouse {
        &WAREHOUSE
    }

    /// The full delivery-zone table.
    pub fn delivery_zones(&self) -> &'static [(&'static str, Zone)] {
        ZONES
    }

    /// Every tracking record as last persisted, without re-deriving. Used by
    /// the admin shipments view; failures degrade to an empty list.
    #[instrument(skip(self))]
    pub async fn all_trackings(&self) -> Vec<TrackingRecord> {
        self.pause().await;

        match self.tracking.list().await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "Listing tracking records failed");
                Vec::new()
            }
        }
    }

    /// Aggregates for the admin dashboard, computed on demand from the order
    /// and product stores.
    #[instrument(skip(self))]
    pub async fn admin_stats(&self) -> Result<DashboardStats, ServiceError> {
        self.pause().await;

        let orders = self.orders.list().await?;
        let products = self.products.list().await?;

        let mut stats = DashboardStats {
            total_orders: orders.len(),
            total_products: products.len(),
            ..DashboardStats::default()
        };
        for order in &orders {
            stats.total_revenue += order.total;
            match order.status {
                OrderStatus::Placed | OrderStatus::Packed => stats.pending += 1,
                OrderStatus::Shipped => stats.in_transit += 1,
                OrderStatus::Delivered => stats.delivered += 1,
            }
        }
        Ok(stats)
    }
}
