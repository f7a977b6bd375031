use serde::{Deserialize, Serialize};

/// Aggregates for the admin dashboard, derived from the order and product
/// stores on each request. Customer counts live with the identity provider
/// and are not reported here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_orders: usize,
    pub total_revenue: f64,
    pub total_products: usize,
    /// Orders currently SHIPPED.
    pub in_transit: usize,
    /// Orders still PLACED or PACKED.
    pub pending: usize,
    /// Orders DELIVERED.
    pub delivered: usize,
}
