//! Configuration module - dashboard settings and collaborator selection.

mod dashboard_config;

pub use dashboard_config::{build_quote_provider, DashboardConfig, QuoteSource};
