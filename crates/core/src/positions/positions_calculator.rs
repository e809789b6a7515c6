//! Progress math for a single position.
//!
//! A non-positive target has no meaningful progress: every function here
//! returns `None` (or `false`) for it instead of dividing by zero.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::Position;
use crate::constants::{FALLING_TREND, HIGHLIGHT_PROGRESS_THRESHOLD, PROGRESS_DECIMAL_PLACES};

/// Amount still needed to reach the target. Negative once over-funded.
pub fn remaining(position: &Position) -> Decimal {
    position
        .target
        .checked_sub(position.invested)
        .unwrap_or_else(|| saturate(position.target))
}

/// Sum that clamps to `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
///
/// Snapshots read back from storage are not re-validated, so totals over
/// them must not panic.
pub fn sum_amounts<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount).unwrap_or_else(|| saturate(amount))
    })
}

fn saturate(toward: Decimal) -> Decimal {
    if toward.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// `invested / target`, or `None` when the target is not positive.
pub fn progress_ratio(invested: Decimal, target: Decimal) -> Option<Decimal> {
    if target <= Decimal::ZERO {
        return None;
    }
    invested.checked_div(target)
}

/// Progress toward the target in percent, rounded to one decimal place.
pub fn progress_pct(invested: Decimal, target: Decimal) -> Option<Decimal> {
    progress_ratio(invested, target)?
        .checked_mul(dec!(100))
        .map(|pct| {
            pct.round_dp_with_strategy(PROGRESS_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        })
}

/// A position is highlighted when its trend is falling and it is less than
/// half funded (compared on the rounded percentage the card displays).
pub fn is_highlighted(position: &Position) -> bool {
    if position.trend != FALLING_TREND {
        return false;
    }
    progress_pct(position.invested, position.target)
        .map(|pct| pct < HIGHLIGHT_PROGRESS_THRESHOLD)
        .unwrap_or(false)
}
