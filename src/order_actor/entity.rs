//! [`ActorEntity`] implementation for the Order domain type.
//!
//! The order store's only cross-actor dependency is the product store: while
//! an order is being created, each line's quantity is deducted from catalog
//! stock through the injected [`ProductClient`]. Orders are otherwise
//! append-only; nothing but `status` ever changes after creation.

use async_trait::async_trait;

use crate::clients::ProductClient;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};

use super::actions::OrderAction;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = ProductClient;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            user_id: params.user_id,
            items: params.items,
            total: params.total,
            status: OrderStatus::Placed,
            created_at: params.created_at,
            shipping_address: params.shipping_address,
        })
    }

    /// Deducts stock for every line before the order is stored. There is no
    /// oversell guard: stock may go negative. No rollback either: a line
    /// failing after earlier deductions leaves those deductions in place,
    /// matching the non-transactional persistence model.
    async fn on_create(&mut self, products: &ProductClient) -> Result<(), String> {
        for item in &self.items {
            products
                .deduct_stock(item.product_id.clone(), item.quantity)
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &ProductClient) -> Result<(), String> {
        Err("orders are immutable after creation; use SetStatus".to_string())
    }

    async fn handle_action(&mut self, action: OrderAction, _ctx: &ProductClient) -> Result<Order, String> {
        match action {
            // Rank-max keeps the state machine forward-only.
            OrderAction::SetStatus(status) => {
                self.status = self.status.max(status);
                Ok(self.clone())
            }
        }
    }
}
