//! Market data models
//!
//! - `quote` - Latest price quote for a ticker symbol (Quote)

mod quote;

pub use quote::Quote;
