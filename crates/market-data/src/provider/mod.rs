//! Live quote provider abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` trait that all providers implement
//! - Concrete provider implementations (Financial Modeling Prep)
//!
//! Providers are handed plain ticker symbols and return whatever quotes the
//! upstream API knows about. Symbols the provider does not recognize are
//! simply absent from the result.

mod traits;

pub mod fmp;

pub use traits::QuoteProvider;
