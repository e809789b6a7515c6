//! Repository traits for key/value persistence.

use async_trait::async_trait;

use crate::errors::Result;

/// A flat string key/value store.
///
/// Reads are synchronous; writes are async so backends can serialize them
/// through a single writer.
#[async_trait]
pub trait KeyValueStoreTrait: Send + Sync {
    /// Get a single value by key. Returns `None` if the key was never written.
    fn get_value(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace a single value.
    async fn set_value(&self, key: &str, value: &str) -> Result<()>;

    /// Insert or replace several values in one write.
    async fn set_values(&self, entries: Vec<(String, String)>) -> Result<()>;
}
