//! Positions module - domain model, add-form parsing and progress math.

mod positions_calculator;
mod positions_model;

pub use positions_calculator::{is_highlighted, progress_pct, progress_ratio, remaining, sum_amounts};
pub use positions_model::{default_positions, NewPositionForm, Position};
