//! Dilution scoring.
//!
//! One point per passing check, unweighted. Three or more points is
//! acceptable.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{DilutionAssessment, DilutionCheck, DilutionCriterion, DilutionVerdict};
use crate::positions::Position;

const MAX_SHARE_COUNT_RATIO: Decimal = dec!(1.10);
const MAX_SBC_TO_REVENUE: Decimal = dec!(0.05);
const ACCEPTABLE_SCORE: u8 = 3;

/// Purposes that make dilution acceptable. Matched exactly, case-sensitive.
const FAVORABLE_PURPOSES: [&str; 3] = ["Strategic", "M&A", "Growth Investment"];

fn passes(check: DilutionCheck, position: &Position) -> bool {
    match check {
        DilutionCheck::ShareGrowth => position.share_count_5y <= MAX_SHARE_COUNT_RATIO,
        DilutionCheck::EpsOutpacesDilution => position.eps_growth_5y > position.share_count_5y,
        DilutionCheck::StockCompensation => position.sbc_to_revenue <= MAX_SBC_TO_REVENUE,
        DilutionCheck::Buybacks => position.has_buybacks,
        DilutionCheck::Purpose => FAVORABLE_PURPOSES.contains(&position.dilution_purpose.as_str()),
    }
}

/// The five checks, individually labeled, in a fixed order.
pub fn dilution_criteria(position: &Position) -> Vec<DilutionCriterion> {
    DilutionCheck::ALL
        .iter()
        .map(|&check| DilutionCriterion {
            check,
            label: check.label().to_string(),
            passed: passes(check, position),
        })
        .collect()
}

pub fn assess_dilution(position: &Position) -> DilutionAssessment {
    let score = DilutionCheck::ALL
        .iter()
        .filter(|&&check| passes(check, position))
        .count() as u8;

    let verdict = if score >= ACCEPTABLE_SCORE {
        DilutionVerdict::Acceptable
    } else {
        DilutionVerdict::RedFlag
    };

    DilutionAssessment { score, verdict }
}
