//! Inventory domain module.
//!
//! This crate contains the stored entity types and their business rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod item;
pub mod status;
pub mod stock;
pub mod warehouse;

pub use item::InventoryItem;
pub use status::StockStatus;
pub use stock::StockItem;
pub use warehouse::{ElectronicItem, GroceryItem, WarehouseItem};
