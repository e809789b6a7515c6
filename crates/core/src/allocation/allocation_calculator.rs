//! Suggested monthly contribution per position.
//!
//! Each position is weighed against the *whole* monthly budget on its own:
//! the suggestions are not apportioned, so their sum may exceed the budget.

use rust_decimal::Decimal;

use crate::positions::{progress_ratio, remaining, sum_amounts, Position};

/// Suggested contribution for one position.
///
/// `(1 - invested / target) * monthly_budget`, capped at the amount still
/// needed. Fully funded positions and positions without a positive target get
/// zero.
pub fn suggest_for(position: &Position, monthly_budget: Decimal) -> Decimal {
    let Some(ratio) = progress_ratio(position.invested, position.target) else {
        return Decimal::ZERO;
    };

    let raw = if ratio < Decimal::ONE {
        Decimal::ONE
            .checked_sub(ratio)
            .and_then(|share| share.checked_mul(monthly_budget))
            .unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    };

    raw.min(remaining(position)).max(Decimal::ZERO)
}

/// Recompute the suggestion of every position against the monthly budget.
///
/// Returns a new list; any previous suggestion is overwritten, so running it
/// twice on unchanged inputs gives the same result.
pub fn suggest_allocation(positions: &[Position], monthly_budget: Decimal) -> Vec<Position> {
    positions
        .iter()
        .map(|position| Position {
            suggestion: Some(suggest_for(position, monthly_budget)),
            ..position.clone()
        })
        .collect()
}

/// Sum of the computed suggestions, `None` if nothing has been computed yet.
pub fn total_suggested(positions: &[Position]) -> Option<Decimal> {
    if positions.iter().all(|p| p.suggestion.is_none()) {
        return None;
    }
    Some(sum_amounts(positions.iter().filter_map(|p| p.suggestion)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positions::default_positions;
    use rust_decimal_macros::dec;

    const BUDGET: Decimal = dec!(29000);

    fn position(invested: Decimal, target: Decimal) -> Position {
        Position {
            invested,
            target,
            ..default_positions().remove(0)
        }
    }

    #[test]
    fn test_apple_example() {
        // ratio 0.2 -> 0.8 * 29000 = 23200, below the 35200 still needed
        assert_eq!(suggest_for(&position(dec!(8800), dec!(44000)), BUDGET), dec!(23200));
    }

    #[test]
    fn test_capped_at_remaining() {
        // ratio 0.9 -> 2900, but only 1000 is still needed
        assert_eq!(suggest_for(&position(dec!(9000), dec!(10000)), BUDGET), dec!(1000));
    }

    #[test]
    fn test_fully_funded_gets_zero() {
        assert_eq!(suggest_for(&position(dec!(44000), dec!(44000)), BUDGET), Decimal::ZERO);
        assert_eq!(suggest_for(&position(dec!(50000), dec!(44000)), BUDGET), Decimal::ZERO);
    }

    #[test]
    fn test_nothing_invested_gets_full_budget() {
        assert_eq!(suggest_for(&position(Decimal::ZERO, dec!(44000)), BUDGET), BUDGET);
    }

    #[test]
    fn test_zero_target_gets_zero() {
        assert_eq!(suggest_for(&position(dec!(100), Decimal::ZERO), BUDGET), Decimal::ZERO);
        assert_eq!(suggest_for(&position(Decimal::ZERO, Decimal::ZERO), BUDGET), Decimal::ZERO);
    }

    #[test]
    fn test_suggest_allocation_sets_every_position() {
        let updated = suggest_allocation(&default_positions(), BUDGET);
        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0].suggestion, Some(dec!(23200)));
        // JNJ: 15000 / 44000 leaves 29000 * 29000 / 44000 = 19113.63...
        let jnj = updated[1].suggestion.unwrap();
        assert_eq!(jnj.round_dp(2), dec!(19113.64));
    }

    #[test]
    fn test_suggestions_may_exceed_budget() {
        let updated = suggest_allocation(&default_positions(), BUDGET);
        let total = total_suggested(&updated).unwrap();
        assert!(total > BUDGET);
    }

    #[test]
    fn test_computed_zero_is_not_absent() {
        let updated = suggest_allocation(&[position(dec!(44000), dec!(44000))], BUDGET);
        assert_eq!(updated[0].suggestion, Some(Decimal::ZERO));
        assert_eq!(total_suggested(&updated), Some(Decimal::ZERO));
    }

    #[test]
    fn test_total_suggested_none_before_compute() {
        assert_eq!(total_suggested(&default_positions()), None);
    }

    #[test]
    fn test_negative_invested_from_snapshot_does_not_overflow() {
        let suggestion = suggest_for(&position(-Decimal::MAX, dec!(1)), BUDGET);
        assert_eq!(suggestion, Decimal::MAX);
    }

    #[test]
    fn test_total_suggested_clamps_on_overflow() {
        let huge = dec!(50000000000000000000000000000);
        let positions: Vec<Position> = default_positions()
            .into_iter()
            .map(|p| Position {
                suggestion: Some(huge),
                ..p
            })
            .collect();
        assert_eq!(total_suggested(&positions), Some(Decimal::MAX));
    }

    #[test]
    fn test_idempotent() {
        let once = suggest_allocation(&default_positions(), BUDGET);
        let twice = suggest_allocation(&once, BUDGET);
        assert_eq!(once, twice);
    }
}
