//! Storage module - the key/value store seam and an in-memory backend.

mod memory_store;
mod storage_traits;

pub use memory_store::MemoryKeyValueStore;
pub use storage_traits::KeyValueStoreTrait;
