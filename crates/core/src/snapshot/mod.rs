//! Snapshot module - persisting the position list with an expiry.

mod snapshot_repository;

pub use snapshot_repository::PositionSnapshotRepository;
