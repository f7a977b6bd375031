//! Order-specific resource logic and entity implementation.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::OrderAction;
pub use error::*;

use rand::Rng;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::{Order, OrderCreate, OrderId};

const ID_PREFIX: &str = "ORD-";
const ID_SUFFIX_LEN: usize = 6;
const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Mints a customer-facing order id: `ORD-` plus a short random uppercase
/// alphanumeric suffix.
fn new_order_id() -> OrderId {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
        .collect();
    OrderId(format!("{ID_PREFIX}{suffix}"))
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) =
        ResourceActor::new(buffer_size, |_params: &OrderCreate| new_order_id());
    (actor, OrderClient::new(generic_client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_ids_follow_wire_format() {
        let id = new_order_id().0;
        assert!(id.starts_with("ORD-"));
        assert_eq!(id.len(), "ORD-".len() + 6);
        assert!(id["ORD-".len()..]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
