//! Custom actions for the Order actor.

use crate::model::OrderStatus;

/// Domain-specific operations on an order beyond standard CRUD.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Advance the order's lifecycle status. Requests for an earlier status
    /// than the current one are ignored (forward-only state machine).
    SetStatus(OrderStatus),
}
