//! Custom actions for the Product actor.
//!
//! These are the operations the order pipeline needs beyond CRUD: reading a
//! stock level and deducting from it at purchase time.

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Deducts the given quantity from stock. Always succeeds; there is no
    /// oversell guard, so stock may go negative.
    DeductStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction.
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// Current stock level.
    CheckStock(i64),
    /// Remaining stock after the deduction (possibly negative).
    DeductStock(i64),
}
