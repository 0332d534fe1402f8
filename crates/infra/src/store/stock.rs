//! Stock reports over stores of [`StockItem`]s.

use stockbook_core::EntityId;
use stockbook_inventory::StockItem;

use super::entity_store::EntityStore;
use super::error::{StoreError, StoreResult};

/// Default threshold for [`EntityStore::low_stock`] callers that have no policy of their own.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

impl<E: StockItem + Clone> EntityStore<E> {
    /// Sum of quantities across all entries.
    pub fn total_quantity(&self) -> i64 {
        self.values().map(StockItem::quantity).sum()
    }

    /// Entries whose quantity is strictly below `threshold`, sorted by id.
    pub fn low_stock(&self, threshold: i64) -> Vec<E> {
        let mut low: Vec<E> = self
            .values()
            .filter(|e| e.quantity() < threshold)
            .cloned()
            .collect();
        low.sort_by_key(|e| e.id());
        low
    }

    /// Replace the quantity of entry `id` with a validated copy and return the new value.
    pub fn set_quantity(&mut self, id: EntityId, quantity: i64) -> StoreResult<E> {
        let current = self.find_by_id(id).ok_or_else(|| StoreError::not_found(id))?;
        let updated = current.with_quantity(quantity)?;
        self.replace(updated.clone())?;
        Ok(updated)
    }
}
