//! DCA Tracker Core - Domain entities, calculations, and services.
//!
//! This crate contains the business logic of the dollar-cost-averaging
//! tracker: the position model, progress and allocation math, the dilution
//! heuristic, the snapshot repository and the dashboard service that ties
//! them together. It is storage-agnostic and defines the key/value store
//! trait implemented by the `storage-sqlite` crate.

pub mod allocation;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod dilution;
pub mod errors;
pub mod positions;
pub mod quotes;
pub mod snapshot;
pub mod storage;

// Re-export the types most callers need
pub use config::{DashboardConfig, QuoteSource};
pub use dashboard::{DashboardService, DashboardSummary, PositionCard};
pub use positions::{NewPositionForm, Position};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
