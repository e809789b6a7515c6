//! Database model for key/value pairs.

use diesel::prelude::*;

/// Database model for one `app_storage` row
#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::app_storage)]
pub struct AppStorageDB {
    pub storage_key: String,
    pub storage_value: String,
}
