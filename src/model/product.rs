use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product, reduced to what order placement needs: a price and name
/// to snapshot, and a stock count to deduct from.
///
/// `stock` is signed on purpose. Order placement does not enforce an oversell
/// guard. A large order simply drives stock negative, and the admin panel is
/// expected to surface that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, stock: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

/// Partial update for a catalog product (admin upsert).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}
