//! SQLite storage implementation for the key/value store.

mod model;
mod repository;

pub use model::AppStorageDB;
pub use repository::KeyValueRepository;

// Re-export trait from core for convenience
pub use dca_tracker_core::storage::KeyValueStoreTrait;
