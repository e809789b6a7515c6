use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::AppStorageDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::app_storage::dsl::*;
use dca_tracker_core::errors::Result;
use dca_tracker_core::storage::KeyValueStoreTrait;

pub struct KeyValueRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl KeyValueRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        KeyValueRepository { pool, writer }
    }
}

#[async_trait]
impl KeyValueStoreTrait for KeyValueRepository {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        app_storage
            .filter(storage_key.eq(key))
            .select(storage_value)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<()> {
        self.set_values(vec![(key.to_string(), value.to_string())])
            .await
    }

    async fn set_values(&self, entries: Vec<(String, String)>) -> Result<()> {
        debug!("sqlite store: writing {} values", entries.len());
        let rows: Vec<AppStorageDB> = entries
            .into_iter()
            .map(|(k, v)| AppStorageDB {
                storage_key: k,
                storage_value: v,
            })
            .collect();

        self.writer
            .exec(move |conn| {
                for row in &rows {
                    diesel::replace_into(app_storage)
                        .values(row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(())
            })
            .await
    }
}
