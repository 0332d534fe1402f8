//! Typed, identifier-keyed entity store with JSON file persistence.
//!
//! The store owns its entities and hands out clones. Persistence is explicit:
//! nothing touches the backing file until `save_to_file` / `load_from_file`.

pub mod config;
pub mod entity_store;
pub mod error;
mod persistence;
pub mod stats;
pub mod stock;

pub use config::{JsonLayout, StoreConfig};
pub use entity_store::EntityStore;
pub use error::{StoreError, StoreResult};
pub use persistence::LoadOutcome;
pub use stats::StoreStatistics;
