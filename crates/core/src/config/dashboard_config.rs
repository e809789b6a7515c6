//! Dashboard configuration, read from `DCA_*` environment variables.

use chrono::Duration;
use dca_tracker_market_data::{FmpProvider, QuoteProvider};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

use crate::constants::{DEFAULT_DEBT_RESERVE, DEFAULT_MONTHLY_BUDGET, DEFAULT_SNAPSHOT_TTL_DAYS};
use crate::errors::{Error, Result};

/// Where live prices come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteSource {
    /// No live prices
    #[default]
    None,
    /// Financial Modeling Prep batch quote API
    Fmp,
}

impl FromStr for QuoteSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "off" => Ok(QuoteSource::None),
            "fmp" => Ok(QuoteSource::Fmp),
            other => Err(Error::InvalidConfigValue(format!(
                "DCA_QUOTE_PROVIDER: unknown provider '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub monthly_budget: Decimal,
    pub debt_reserve: Decimal,
    pub snapshot_ttl_days: i64,
    pub quote_source: QuoteSource,
    pub quote_api_key: Option<String>,
    pub db_path: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
            debt_reserve: DEFAULT_DEBT_RESERVE,
            snapshot_ttl_days: DEFAULT_SNAPSHOT_TTL_DAYS,
            quote_source: QuoteSource::None,
            quote_api_key: None,
            db_path: "./db/dca.db".to_string(),
        }
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidConfigValue(format!("{}: '{}'", key, raw)))
}

impl DashboardConfig {
    /// Load from the process environment, after applying a `.env` file if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source. Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("DCA_MONTHLY_BUDGET") {
            config.monthly_budget = parse_var("DCA_MONTHLY_BUDGET", &raw)?;
        }
        if let Some(raw) = lookup("DCA_DEBT_RESERVE") {
            config.debt_reserve = parse_var("DCA_DEBT_RESERVE", &raw)?;
        }
        if let Some(raw) = lookup("DCA_SNAPSHOT_TTL_DAYS") {
            config.snapshot_ttl_days = parse_var("DCA_SNAPSHOT_TTL_DAYS", &raw)?;
        }
        if let Some(raw) = lookup("DCA_QUOTE_PROVIDER") {
            config.quote_source = raw.parse()?;
        }
        config.quote_api_key = lookup("DCA_QUOTE_API_KEY").filter(|k| !k.trim().is_empty());
        if let Some(raw) = lookup("DCA_DB_PATH") {
            config.db_path = raw;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.monthly_budget.is_sign_negative() && !self.monthly_budget.is_zero() {
            return Err(Error::InvalidConfigValue(
                "DCA_MONTHLY_BUDGET cannot be negative".to_string(),
            ));
        }
        if self.snapshot_ttl_days <= 0 {
            return Err(Error::InvalidConfigValue(
                "DCA_SNAPSHOT_TTL_DAYS must be positive".to_string(),
            ));
        }
        if Duration::try_days(self.snapshot_ttl_days).is_none() {
            return Err(Error::InvalidConfigValue(format!(
                "DCA_SNAPSHOT_TTL_DAYS is too large: {}",
                self.snapshot_ttl_days
            )));
        }
        if self.quote_source == QuoteSource::Fmp && self.quote_api_key.is_none() {
            return Err(Error::MissingConfigKey("DCA_QUOTE_API_KEY".to_string()));
        }
        Ok(())
    }
}

/// The configured live quote provider, if any.
pub fn build_quote_provider(config: &DashboardConfig) -> Result<Option<Arc<dyn QuoteProvider>>> {
    match config.quote_source {
        QuoteSource::None => Ok(None),
        QuoteSource::Fmp => {
            let api_key = config
                .quote_api_key
                .clone()
                .ok_or_else(|| Error::MissingConfigKey("DCA_QUOTE_API_KEY".to_string()))?;
            let provider: Arc<dyn QuoteProvider> = Arc::new(FmpProvider::new(api_key));
            Ok(Some(provider))
        }
    }
}
