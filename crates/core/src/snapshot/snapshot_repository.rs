//! Position list snapshot stored as two keys in a key/value store.
//!
//! `dcaStocks` holds the JSON list and `dcaStocksTimestamp` the write time in
//! epoch milliseconds. A snapshot older than the TTL, or one that cannot be
//! parsed, is replaced by the default seed list.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info, warn};
use std::sync::Arc;

use crate::constants::{SNAPSHOT_POSITIONS_KEY, SNAPSHOT_TIMESTAMP_KEY};
use crate::errors::Result;
use crate::positions::{default_positions, Position};
use crate::storage::KeyValueStoreTrait;

pub struct PositionSnapshotRepository {
    store: Arc<dyn KeyValueStoreTrait>,
    ttl: Duration,
}

impl PositionSnapshotRepository {
    /// A TTL beyond what `Duration` can hold never expires.
    pub fn new(store: Arc<dyn KeyValueStoreTrait>, ttl_days: i64) -> Self {
        PositionSnapshotRepository {
            store,
            ttl: Duration::try_days(ttl_days).unwrap_or(Duration::MAX),
        }
    }

    pub async fn load(&self) -> Result<Vec<Position>> {
        self.load_at(Utc::now()).await
    }

    pub async fn save(&self, positions: &[Position]) -> Result<()> {
        self.save_at(positions, Utc::now()).await
    }

    /// Load the snapshot as of `now`, reseeding defaults when it is missing,
    /// stale or corrupt.
    pub async fn load_at(&self, now: DateTime<Utc>) -> Result<Vec<Position>> {
        if let Some(positions) = self.read_fresh(now)? {
            debug!("Loaded {} positions from snapshot", positions.len());
            return Ok(positions);
        }

        info!("Reseeding position snapshot with defaults");
        let defaults = default_positions();
        self.save_at(&defaults, now).await?;
        Ok(defaults)
    }

    /// Write the full list and refresh the timestamp in one store write.
    pub async fn save_at(&self, positions: &[Position], now: DateTime<Utc>) -> Result<()> {
        let json = serde_json::to_string(positions)?;
        self.store
            .set_values(vec![
                (SNAPSHOT_POSITIONS_KEY.to_string(), json),
                (
                    SNAPSHOT_TIMESTAMP_KEY.to_string(),
                    now.timestamp_millis().to_string(),
                ),
            ])
            .await
    }

    /// `Ok(None)` means the caller should reseed. Only store failures are errors.
    fn read_fresh(&self, now: DateTime<Utc>) -> Result<Option<Vec<Position>>> {
        let Some(raw_timestamp) = self.store.get_value(SNAPSHOT_TIMESTAMP_KEY)? else {
            return Ok(None);
        };

        let Ok(written_ms) = raw_timestamp.trim().parse::<i64>() else {
            warn!("Ignoring snapshot with unreadable timestamp '{}'", raw_timestamp);
            return Ok(None);
        };

        let age_ms = now.timestamp_millis().saturating_sub(written_ms);
        if age_ms >= self.ttl.num_milliseconds() {
            warn!("Position snapshot expired ({} ms old)", age_ms);
            return Ok(None);
        }

        let Some(raw_positions) = self.store.get_value(SNAPSHOT_POSITIONS_KEY)? else {
            warn!("Snapshot timestamp present but position list missing");
            return Ok(None);
        };

        match serde_json::from_str::<Vec<Position>>(&raw_positions) {
            Ok(positions) => Ok(Some(positions)),
            Err(e) => {
                warn!("Ignoring corrupt position snapshot: {}", e);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::suggest_allocation;
    use crate::storage::MemoryKeyValueStore;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn repo() -> (Arc<MemoryKeyValueStore>, PositionSnapshotRepository) {
        let store = Arc::new(MemoryKeyValueStore::new());
        let repo = PositionSnapshotRepository::new(store.clone(), 30);
        (store, repo)
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
    }

    fn custom_list() -> Vec<Position> {
        let mut positions = suggest_allocation(&default_positions(), dec!(29000));
        positions[1].ticker = "JNJ2".to_string();
        positions.remove(0);
        positions
    }

    #[tokio::test]
    async fn test_round_trip_within_window() {
        let (_, repo) = repo();
        let saved = custom_list();
        repo.save_at(&saved, t0()).await.unwrap();

        let loaded = repo.load_at(t0() + Duration::days(29)).await.unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_expired_snapshot_reseeds_defaults() {
        let (store, repo) = repo();
        repo.save_at(&custom_list(), t0()).await.unwrap();

        let later = t0() + Duration::days(30);
        let loaded = repo.load_at(later).await.unwrap();
        assert_eq!(loaded, default_positions());

        // Both keys are rewritten
        let ts = store.get_value(SNAPSHOT_TIMESTAMP_KEY).unwrap().unwrap();
        assert_eq!(ts, later.timestamp_millis().to_string());
        let json = store.get_value(SNAPSHOT_POSITIONS_KEY).unwrap().unwrap();
        let stored: Vec<Position> = serde_json::from_str(&json).unwrap();
        assert_eq!(stored, default_positions());
    }

    #[tokio::test]
    async fn test_empty_store_seeds_defaults() {
        let (store, repo) = repo();
        let loaded = repo.load_at(t0()).await.unwrap();
        assert_eq!(loaded, default_positions());
        assert!(store.get_value(SNAPSHOT_POSITIONS_KEY).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_corrupt_list_reseeds_defaults() {
        let (store, repo) = repo();
        store
            .set_value(SNAPSHOT_TIMESTAMP_KEY, &t0().timestamp_millis().to_string())
            .await
            .unwrap();
        store
            .set_value(SNAPSHOT_POSITIONS_KEY, "[{not json")
            .await
            .unwrap();

        let loaded = repo.load_at(t0()).await.unwrap();
        assert_eq!(loaded, default_positions());
    }

    #[tokio::test]
    async fn test_unreadable_timestamp_reseeds_defaults() {
        let (store, repo) = repo();
        repo.save_at(&custom_list(), t0()).await.unwrap();
        store
            .set_value(SNAPSHOT_TIMESTAMP_KEY, "yesterday")
            .await
            .unwrap();

        let loaded = repo.load_at(t0()).await.unwrap();
        assert_eq!(loaded, default_positions());
    }

    #[tokio::test]
    async fn test_empty_list_is_a_valid_snapshot() {
        let (_, repo) = repo();
        repo.save_at(&[], t0()).await.unwrap();
        let loaded = repo.load_at(t0()).await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_ttl_never_expires() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let repo = PositionSnapshotRepository::new(store, 200_000_000_000_000);
        let saved = custom_list();
        repo.save_at(&saved, t0()).await.unwrap();

        let loaded = repo.load_at(t0() + Duration::days(36_500)).await.unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_decimals_stored_as_strings() {
        let (store, repo) = repo();
        repo.save_at(&default_positions(), t0()).await.unwrap();

        let json = store.get_value(SNAPSHOT_POSITIONS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["target"], serde_json::json!("44000"));
        assert_eq!(value[0]["shareCount5Y"], serde_json::json!("1.05"));
    }
}
