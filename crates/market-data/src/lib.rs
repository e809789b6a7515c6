//! DCA Tracker Market Data Crate
//!
//! Provider-agnostic live quote fetching for the DCA tracker.
//!
//! The tracker only ever needs "latest price per ticker" for display, so the
//! surface is small:
//!
//! - [`QuoteProvider`] - Trait implemented by every quote source
//! - [`Quote`] - Latest price for one ticker symbol
//! - [`MarketDataError`] - Failures while talking to a provider
//! - [`FmpProvider`] - Financial Modeling Prep batch quote endpoint

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::Quote;
pub use provider::fmp::FmpProvider;
pub use provider::QuoteProvider;
