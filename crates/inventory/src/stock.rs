//! Shared capability of everything that sits on a shelf.

use stockbook_core::{DomainResult, Entity, EntityId};

use crate::status::StockStatus;

/// Common read surface of stock-keeping entities, plus the one
/// copy-with-change every stock entity supports.
///
/// Implemented by each concrete item type and by the [`WarehouseItem`]
/// union, so stores and reports can be written once over `E: StockItem`.
///
/// [`WarehouseItem`]: crate::WarehouseItem
pub trait StockItem: Entity<Id = EntityId> + Sized {
    fn name(&self) -> &str;

    fn quantity(&self) -> i64;

    /// Return a copy with `quantity` replaced, re-validated. The receiver is untouched.
    fn with_quantity(&self, quantity: i64) -> DomainResult<Self>;

    fn status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity())
    }
}
