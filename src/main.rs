//! Demo walkthrough of the storefront engine.
//!
//! Seeds a small catalog, places an order as a demo customer, reads its
//! delivery tracking, advances it as an admin, and prints the dashboard
//! aggregates, then shuts the actor system down.

use bazaar_core::config::SystemConfig;
use bazaar_core::lifecycle::{setup_tracing, OrderSystem};
use bazaar_core::model::{CartItem, ProductCreate, ShippingAddress, User, UserRole, OrderStatus};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting order system demo");
    let system = OrderSystem::with_config(SystemConfig::from_env());
    let service = &system.service;

    // Seed a couple of catalog items
    let shirt_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Indigo Oxford Shirt".to_string(),
            price: 1899.0,
            stock: 45,
        })
        .await
        .map_err(|e| e.to_string())?;
    let blazer_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Tailored Linen Blazer".to_string(),
            price: 4999.0,
            stock: 20,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%shirt_id, %blazer_id, "Catalog seeded");

    let customer = User::new("user_demo", "Asha Sen", "asha@example.com", UserRole::Customer);
    let cart = vec![
        CartItem { product_id: shirt_id, quantity: 2 },
        CartItem { product_id: blazer_id, quantity: 1 },
    ];
    let address = ShippingAddress {
        name: customer.name.clone(),
        email: customer.email.clone(),
        address: "12 Park Street".to_string(),
        city: "Kolkata".to_string(),
        zip: "700001".to_string(),
    };

    let order = service
        .place_order(&cart, address, Some(&customer))
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %order.id, total = order.total, "Order placed");

    if let Some(tracking) = service
        .get_order_tracking(order.id.clone())
        .await
        .map_err(|e| e.to_string())?
    {
        info!(
            status = %tracking.status,
            progress = tracking.progress,
            location = %tracking.current_location,
            eta = %tracking.estimated_delivery,
            "Tracking state"
        );
    }

    // Admin override: mark the order shipped ahead of schedule
    let shipped = service
        .update_order_status(order.id.clone(), OrderStatus::Shipped)
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %shipped.id, status = %shipped.status, "Status advanced");

    let stats = service.admin_stats().await.map_err(|e| e.to_string())?;
    info!(
        orders = stats.total_orders,
        revenue = stats.total_revenue,
        in_transit = stats.in_transit,
        "Dashboard"
    );

    system.shutdown().await
}
