use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest price for a single ticker symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker symbol as reported by the provider
    pub symbol: String,

    /// Latest traded price
    pub price: Decimal,

    /// Timestamp of the quote
    pub timestamp: DateTime<Utc>,

    /// Source of the quote (FMP, ...)
    pub source: String,
}

impl Quote {
    pub fn new(symbol: String, price: Decimal, timestamp: DateTime<Utc>, source: String) -> Self {
        Self {
            symbol,
            price,
            timestamp,
            source,
        }
    }
}
