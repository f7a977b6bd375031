//! Product catalog store: the price/name/stock source the order pipeline
//! snapshots from and deducts against. Catalog management beyond that
//! (admin upsert/delete) is a thin layer over the generic CRUD surface.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::{ProductAction, ProductActionResult};
pub use error::*;

use rand::Rng;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::{Product, ProductCreate, ProductId};

/// Mints a catalog id: `prod_` plus a random lowercase alphanumeric suffix.
/// Random rather than sequential so ids stay unique across snapshot reloads.
fn new_product_id() -> ProductId {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    ProductId(format!("prod_{suffix}"))
}

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) =
        ResourceActor::new(buffer_size, |_params: &ProductCreate| new_product_id());
    (actor, ProductClient::new(generic_client))
}
