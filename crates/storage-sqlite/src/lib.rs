//! SQLite storage implementation for the DCA tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the key/value store trait defined in `dca-tracker-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - A single-writer actor that serializes every write
//! - The key/value repository backing the position snapshot
//!
//! ```text
//!      core (domain)
//!            │
//!            ▼
//!  storage-sqlite (this crate)
//!            │
//!            ▼
//!        SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod key_value;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, open, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use errors::{IntoCore, StorageError};
pub use key_value::KeyValueRepository;

// Re-export from dca-tracker-core for convenience
pub use dca_tracker_core::errors::{DatabaseError, Error, Result};
