//! Dashboard module - the stateful service behind the tracker UI.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::{DashboardSummary, PositionCard};
pub use dashboard_service::DashboardService;
