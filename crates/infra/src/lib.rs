//! Infrastructure layer: the generic entity store and its file persistence.

pub mod store;

pub use store::{
    EntityStore, JsonLayout, LoadOutcome, StoreConfig, StoreError, StoreResult, StoreStatistics,
};
