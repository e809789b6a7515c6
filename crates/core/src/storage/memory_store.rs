use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use std::sync::RwLock;

use super::KeyValueStoreTrait;
use crate::errors::{Error, Result};

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> Error {
        Error::Unexpected("Memory store lock poisoned".to_string())
    }
}

#[async_trait]
impl KeyValueStoreTrait for MemoryKeyValueStore {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(|_| Self::poisoned())?;
        Ok(values.get(key).cloned())
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<()> {
        debug!("memory store: set {}", key);
        let mut values = self.values.write().map_err(|_| Self::poisoned())?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn set_values(&self, entries: Vec<(String, String)>) -> Result<()> {
        debug!("memory store: set {} values", entries.len());
        let mut values = self.values.write().map_err(|_| Self::poisoned())?;
        values.extend(entries);
        Ok(())
    }
}
