//! Dilution assessment models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five independent checks, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DilutionCheck {
    ShareGrowth,
    EpsOutpacesDilution,
    StockCompensation,
    Buybacks,
    Purpose,
}

impl DilutionCheck {
    pub const ALL: [DilutionCheck; 5] = [
        DilutionCheck::ShareGrowth,
        DilutionCheck::EpsOutpacesDilution,
        DilutionCheck::StockCompensation,
        DilutionCheck::Buybacks,
        DilutionCheck::Purpose,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DilutionCheck::ShareGrowth => "Share count up at most 10% over 5 years",
            DilutionCheck::EpsOutpacesDilution => "EPS growth outpaces share count growth",
            DilutionCheck::StockCompensation => "Stock-based compensation at most 5% of revenue",
            DilutionCheck::Buybacks => "Company buys back shares",
            DilutionCheck::Purpose => "Dilution funds strategy, M&A or growth",
        }
    }
}

/// Outcome of one check, labeled for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DilutionCriterion {
    pub check: DilutionCheck,
    pub label: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DilutionVerdict {
    Acceptable,
    RedFlag,
}

impl fmt::Display for DilutionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DilutionVerdict::Acceptable => write!(f, "Acceptable"),
            DilutionVerdict::RedFlag => write!(f, "Red Flag"),
        }
    }
}

/// Score (0..=5) and the verdict derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DilutionAssessment {
    pub score: u8,
    pub verdict: DilutionVerdict,
}
