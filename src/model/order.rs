use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ProductId;

/// Type-safe identifier for Orders.
///
/// Printed form is the human-readable id handed to customers,
/// e.g. `ORD-7F3K2A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Delivery lifecycle of an order.
///
/// The variants are declared in lifecycle order, so the derived `Ord` ranks
/// them: `Placed < Packed < Shipped < Delivered`. Every mutation path in the
/// system takes `max(current, requested)`, which makes the state machine
/// forward-only: a status never moves backwards, whether it was reached by
/// elapsed time or by an admin override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,
    Packed,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Placed,
        OrderStatus::Packed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Placed => "PLACED",
            OrderStatus::Packed => "PACKED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
        };
        write!(f, "{label}")
    }
}

/// One line of an order, with the product's price and name snapshotted at
/// purchase time. Later catalog edits do not reach into past orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: f64,
    pub name: String,
}

/// Destination for an order. Free-text fields; `city` is matched against the
/// delivery-zone table at tracking time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip: String,
}

impl ShippingAddress {
    /// Returns the first required field that is blank, if any.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("zip", &self.zip),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// A customer order. Everything except `status` is immutable after creation;
/// `total` is computed once at purchase time and stored, never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub shipping_address: ShippingAddress,
}

/// Payload for creating a new order. Built by the service layer after cart
/// validation and price snapshotting.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub shipping_address: ShippingAddress,
}

/// One line of a shopping cart, as submitted at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ranks_in_lifecycle_order() {
        assert!(OrderStatus::Placed < OrderStatus::Packed);
        assert!(OrderStatus::Packed < OrderStatus::Shipped);
        assert!(OrderStatus::Shipped < OrderStatus::Delivered);
        // rank-max never regresses
        assert_eq!(OrderStatus::Delivered.max(OrderStatus::Packed), OrderStatus::Delivered);
    }

    #[test]
    fn status_serializes_screaming_case() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"SHIPPED\"");
        let back: OrderStatus = serde_json::from_str("\"PLACED\"").unwrap();
        assert_eq!(back, OrderStatus::Placed);
    }

    #[test]
    fn address_reports_first_blank_field() {
        let address = ShippingAddress {
            name: "Asha Sen".into(),
            email: "asha@example.com".into(),
            address: "  ".into(),
            city: "Kolkata".into(),
            zip: "700001".into(),
        };
        assert_eq!(address.first_missing_field(), Some("address"));

        let complete = ShippingAddress {
            address: "12 Park Street".into(),
            ..address
        };
        assert_eq!(complete.first_missing_field(), None);
    }
}
