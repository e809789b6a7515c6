//! Position domain models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::MAX_FORM_AMOUNT;
use crate::errors::{Result, ValidationError};

/// Domain model representing one tracked investment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub name: String,
    pub ticker: String,
    /// Funding goal
    pub target: Decimal,
    /// Amount contributed so far; may exceed `target`
    pub invested: Decimal,
    /// Free-text label, only "Falling" means anything to the engine
    pub trend: String,
    /// Shares outstanding now / five years ago (1.0 = no dilution)
    #[serde(rename = "shareCount5Y")]
    pub share_count_5y: Decimal,
    /// EPS now / five years ago
    #[serde(rename = "epsGrowth5Y")]
    pub eps_growth_5y: Decimal,
    /// Stock-based compensation as a fraction of revenue
    pub sbc_to_revenue: Decimal,
    pub has_buybacks: bool,
    pub dilution_purpose: String,
    /// Last computed monthly allocation. `None` until computed; a computed
    /// zero is `Some(0)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Decimal>,
}

/// Seed list used on first run and whenever the persisted snapshot expires
pub fn default_positions() -> Vec<Position> {
    vec![
        Position {
            name: "Apple".to_string(),
            ticker: "AAPL".to_string(),
            target: dec!(44000),
            invested: dec!(8800),
            trend: "Falling".to_string(),
            share_count_5y: dec!(1.05),
            eps_growth_5y: dec!(1.3),
            sbc_to_revenue: dec!(0.03),
            has_buybacks: true,
            dilution_purpose: "Strategic".to_string(),
            suggestion: None,
        },
        Position {
            name: "Johnson & Johnson".to_string(),
            ticker: "JNJ".to_string(),
            target: dec!(44000),
            invested: dec!(15000),
            trend: "Rising".to_string(),
            share_count_5y: dec!(1.01),
            eps_growth_5y: dec!(1.12),
            sbc_to_revenue: dec!(0.01),
            has_buybacks: true,
            dilution_purpose: "Stock-based compensation".to_string(),
            suggestion: None,
        },
    ]
}

/// Raw add-form input. Numeric fields arrive as text and are parsed by
/// [`NewPositionForm::into_position`].
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPositionForm {
    pub name: String,
    pub ticker: String,
    pub target: String,
    pub invested: String,
    pub trend: String,
    #[serde(rename = "shareCount5Y")]
    pub share_count_5y: String,
    #[serde(rename = "epsGrowth5Y")]
    pub eps_growth_5y: String,
    pub sbc_to_revenue: String,
    pub has_buybacks: bool,
    pub dilution_purpose: String,
}

impl NewPositionForm {
    /// Parse and validate the form into a typed position.
    ///
    /// Blank numeric fields default to zero. Anything else must parse as a
    /// non-negative decimal no larger than [`MAX_FORM_AMOUNT`].
    pub fn into_position(self) -> Result<Position> {
        Ok(Position {
            target: parse_amount("target", &self.target)?,
            invested: parse_amount("invested", &self.invested)?,
            share_count_5y: parse_amount("shareCount5Y", &self.share_count_5y)?,
            eps_growth_5y: parse_amount("epsGrowth5Y", &self.eps_growth_5y)?,
            sbc_to_revenue: parse_amount("sbcToRevenue", &self.sbc_to_revenue)?,
            name: self.name.trim().to_string(),
            ticker: self.ticker.trim().to_string(),
            trend: self.trend.trim().to_string(),
            has_buybacks: self.has_buybacks,
            dilution_purpose: self.dilution_purpose.trim().to_string(),
            suggestion: None,
        })
    }
}

fn parse_amount(field: &str, raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ValidationError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::NegativeValue {
            field: field.to_string(),
        }
        .into());
    }

    if value > MAX_FORM_AMOUNT {
        return Err(ValidationError::ValueTooLarge {
            field: field.to_string(),
            max: MAX_FORM_AMOUNT,
        }
        .into());
    }

    Ok(value)
}
