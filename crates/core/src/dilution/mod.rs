//! Dilution module - five-point share dilution heuristic.

mod dilution_calculator;
mod dilution_model;

pub use dilution_calculator::{assess_dilution, dilution_criteria};
pub use dilution_model::{DilutionAssessment, DilutionCheck, DilutionCriterion, DilutionVerdict};
