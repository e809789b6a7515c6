use dca_tracker_market_data::QuoteProvider;
use log::{debug, info};
use std::sync::Arc;

use super::{DashboardSummary, PositionCard};
use crate::allocation::suggest_allocation;
use crate::config::DashboardConfig;
use crate::errors::{Result, ValidationError};
use crate::positions::{NewPositionForm, Position};
use crate::quotes::PriceBoard;
use crate::snapshot::PositionSnapshotRepository;
use crate::storage::KeyValueStoreTrait;

/// Owns the position list for a session.
///
/// The in-memory list is the source of truth; every mutation is mirrored to
/// the snapshot repository before returning.
pub struct DashboardService {
    config: DashboardConfig,
    repository: PositionSnapshotRepository,
    positions: Vec<Position>,
    prices: PriceBoard,
}

impl DashboardService {
    /// Load the persisted snapshot (or the default seed) from `store`.
    pub async fn load(config: DashboardConfig, store: Arc<dyn KeyValueStoreTrait>) -> Result<Self> {
        let repository = PositionSnapshotRepository::new(store, config.snapshot_ttl_days);
        let positions = repository.load().await?;
        info!("Dashboard loaded with {} positions", positions.len());

        Ok(DashboardService {
            config,
            repository,
            positions,
            prices: PriceBoard::new(),
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn prices(&self) -> &PriceBoard {
        &self.prices
    }

    /// Replace the in-memory list with whatever the store holds now.
    pub async fn reload(&mut self) -> Result<()> {
        self.positions = self.repository.load().await?;
        Ok(())
    }

    /// Validate the form and put the new position at the top of the list.
    pub async fn add_position(&mut self, form: NewPositionForm) -> Result<Position> {
        let position = form.into_position()?;
        debug!("Adding position {} ({})", position.name, position.ticker);
        self.positions.insert(0, position.clone());
        self.persist().await?;
        Ok(position)
    }

    pub async fn delete_position(&mut self, index: usize) -> Result<Position> {
        if index >= self.positions.len() {
            return Err(ValidationError::IndexOutOfRange {
                index,
                len: self.positions.len(),
            }
            .into());
        }
        let removed = self.positions.remove(index);
        debug!("Deleted position {} ({})", removed.name, removed.ticker);
        self.persist().await?;
        Ok(removed)
    }

    /// Recompute every suggestion against the configured monthly budget.
    pub async fn suggest_allocation(&mut self) -> Result<()> {
        self.positions = suggest_allocation(&self.positions, self.config.monthly_budget);
        self.persist().await
    }

    /// Pull live prices for the current tickers. Never fails; see [`PriceBoard::refresh`].
    pub async fn refresh_prices(&mut self, provider: &dyn QuoteProvider) -> usize {
        self.prices.refresh(provider, &self.positions).await
    }

    pub fn cards(&self) -> Vec<PositionCard> {
        self.positions
            .iter()
            .enumerate()
            .map(|(index, position)| {
                PositionCard::from_position(index, position, self.prices.price(&position.ticker))
            })
            .collect()
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::new(
            &self.positions,
            self.config.monthly_budget,
            self.config.debt_reserve,
        )
    }

    async fn persist(&self) -> Result<()> {
        self.repository.save(&self.positions).await
    }
}
