//! View models handed to the presentation layer.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::allocation::total_suggested;
use crate::dilution::{assess_dilution, dilution_criteria, DilutionAssessment, DilutionCriterion};
use crate::positions::{is_highlighted, progress_pct, remaining, sum_amounts, Position};

/// Everything one position card displays
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionCard {
    pub index: usize,
    pub name: String,
    pub ticker: String,
    pub target: Decimal,
    pub invested: Decimal,
    pub remaining: Decimal,
    /// `None` when the target is not positive
    pub progress_pct: Option<Decimal>,
    /// "20.0%" or "N/A"
    pub progress_label: String,
    pub trend: String,
    pub highlight: bool,
    /// Suggested allocation rounded to whole units; `None` until computed
    pub suggestion: Option<Decimal>,
    pub dilution: DilutionAssessment,
    pub dilution_criteria: Vec<DilutionCriterion>,
    pub live_price: Option<Decimal>,
}

impl PositionCard {
    pub fn from_position(index: usize, position: &Position, live_price: Option<Decimal>) -> Self {
        let progress = progress_pct(position.invested, position.target);
        let progress_label = match progress {
            Some(pct) => format!("{:.1}%", pct),
            None => "N/A".to_string(),
        };

        PositionCard {
            index,
            name: position.name.clone(),
            ticker: position.ticker.clone(),
            target: position.target,
            invested: position.invested,
            remaining: remaining(position),
            progress_pct: progress,
            progress_label,
            trend: position.trend.clone(),
            highlight: is_highlighted(position),
            suggestion: position
                .suggestion
                .map(|s| s.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)),
            dilution: assess_dilution(position),
            dilution_criteria: dilution_criteria(position),
            live_price,
        }
    }
}

/// Budget panel totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub monthly_budget: Decimal,
    pub debt_reserve: Decimal,
    pub position_count: usize,
    pub total_target: Decimal,
    pub total_invested: Decimal,
    /// `None` until suggestions have been computed
    pub total_suggested: Option<Decimal>,
}

impl DashboardSummary {
    pub fn new(positions: &[Position], monthly_budget: Decimal, debt_reserve: Decimal) -> Self {
        DashboardSummary {
            monthly_budget,
            debt_reserve,
            position_count: positions.len(),
            total_target: sum_amounts(positions.iter().map(|p| p.target)),
            total_invested: sum_amounts(positions.iter().map(|p| p.invested)),
            total_suggested: total_suggested(positions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::suggest_allocation;
    use crate::dilution::DilutionVerdict;
    use crate::positions::default_positions;
    use rust_decimal_macros::dec;

    #[test]
    fn test_card_for_apple() {
        let card = PositionCard::from_position(0, &default_positions()[0], Some(dec!(190.5)));
        assert_eq!(card.remaining, dec!(35200));
        assert_eq!(card.progress_pct, Some(dec!(20.0)));
        assert_eq!(card.progress_label, "20.0%");
        assert!(card.highlight);
        assert_eq!(card.suggestion, None);
        assert_eq!(card.dilution.score, 5);
        assert_eq!(card.dilution.verdict, DilutionVerdict::Acceptable);
        assert_eq!(card.dilution_criteria.len(), 5);
        assert_eq!(card.live_price, Some(dec!(190.5)));
    }

    #[test]
    fn test_card_rounds_suggestion() {
        let positions = suggest_allocation(&default_positions(), dec!(29000));
        let card = PositionCard::from_position(1, &positions[1], None);
        assert_eq!(card.suggestion, Some(dec!(19114)));
    }

    #[test]
    fn test_card_shows_computed_zero() {
        let mut position = default_positions().remove(0);
        position.invested = position.target;
        let positions = suggest_allocation(&[position], dec!(29000));
        let card = PositionCard::from_position(0, &positions[0], None);
        assert_eq!(card.suggestion, Some(Decimal::ZERO));
    }

    #[test]
    fn test_card_zero_target() {
        let mut position = default_positions().remove(0);
        position.target = Decimal::ZERO;
        let card = PositionCard::from_position(0, &position, None);
        assert_eq!(card.progress_pct, None);
        assert_eq!(card.progress_label, "N/A");
        assert!(!card.highlight);
    }

    #[test]
    fn test_summary_totals() {
        let summary = DashboardSummary::new(&default_positions(), dec!(29000), dec!(150000));
        assert_eq!(summary.position_count, 2);
        assert_eq!(summary.total_target, dec!(88000));
        assert_eq!(summary.total_invested, dec!(23800));
        assert_eq!(summary.total_suggested, None);
        assert_eq!(summary.debt_reserve, dec!(150000));
    }

    #[test]
    fn test_summary_of_oversized_snapshot_does_not_overflow() {
        let huge = dec!(50000000000000000000000000000);
        let positions: Vec<Position> = default_positions()
            .into_iter()
            .map(|p| Position {
                target: huge,
                invested: huge,
                ..p
            })
            .collect();
        let summary = DashboardSummary::new(&positions, dec!(29000), dec!(150000));
        assert_eq!(summary.total_target, Decimal::MAX);
        assert_eq!(summary.total_invested, Decimal::MAX);
    }
}
