//! Quotes module - live price table shown next to each position.

mod price_board;

pub use price_board::PriceBoard;
