//! Allocation module - monthly contribution suggestions.

mod allocation_calculator;

pub use allocation_calculator::{suggest_allocation, suggest_for, total_suggested};
