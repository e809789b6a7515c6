//! Ticker -> latest price table.
//!
//! Prices are display-only; no calculation reads them.

use chrono::{DateTime, Utc};
use dca_tracker_market_data::QuoteProvider;
use log::{debug, error, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::positions::Position;

#[derive(Debug, Clone, Default)]
pub struct PriceBoard {
    prices: HashMap<String, Decimal>,
    last_updated: Option<DateTime<Utc>>,
}

fn normalize(ticker: &str) -> String {
    ticker.trim().to_uppercase()
}

impl PriceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn price(&self, ticker: &str) -> Option<Decimal> {
        self.prices.get(&normalize(ticker)).copied()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Distinct, non-blank tickers in list order.
    pub fn symbols_for(positions: &[Position]) -> Vec<String> {
        let mut symbols: Vec<String> = Vec::new();
        for position in positions {
            let symbol = normalize(&position.ticker);
            if !symbol.is_empty() && !symbols.contains(&symbol) {
                symbols.push(symbol);
            }
        }
        symbols
    }

    /// Fetch prices for every ticker in `positions` and merge them in.
    ///
    /// Returns the number of prices updated. A failed fetch is logged and
    /// leaves the table as it was.
    pub async fn refresh(&mut self, provider: &dyn QuoteProvider, positions: &[Position]) -> usize {
        let symbols = Self::symbols_for(positions);
        if symbols.is_empty() {
            return 0;
        }

        match provider.latest_prices(&symbols).await {
            Ok(quotes) => {
                let updated = quotes.len();
                for quote in quotes {
                    self.prices.insert(normalize(&quote.symbol), quote.price);
                }
                self.last_updated = Some(Utc::now());
                debug!(
                    "{} returned {} of {} prices",
                    provider.id(),
                    updated,
                    symbols.len()
                );
                updated
            }
            Err(e) if e.is_transient() => {
                warn!("Price refresh from {} failed, will retry next time: {}", provider.id(), e);
                0
            }
            Err(e) => {
                error!("Price refresh from {} failed: {}", provider.id(), e);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positions::default_positions;
    use async_trait::async_trait;
    use dca_tracker_market_data::{MarketDataError, Quote};
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct MockProvider {
        response: Mutex<Option<Result<Vec<Quote>, MarketDataError>>>,
        requested: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn returning(result: Result<Vec<Quote>, MarketDataError>) -> Self {
            Self {
                response: Mutex::new(Some(result)),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl QuoteProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn latest_prices(&self, symbols: &[String]) -> Result<Vec<Quote>, MarketDataError> {
            self.requested.lock().unwrap().extend_from_slice(symbols);
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn quote(symbol: &str, price: Decimal) -> Quote {
        Quote::new(symbol.to_string(), price, Utc::now(), "MOCK".to_string())
    }

    #[test]
    fn test_symbols_dedup_and_skip_blank() {
        let mut positions = default_positions();
        let mut dup = positions[0].clone();
        dup.ticker = " aapl ".to_string();
        let mut blank = positions[0].clone();
        blank.ticker = "  ".to_string();
        positions.push(dup);
        positions.push(blank);

        assert_eq!(PriceBoard::symbols_for(&positions), vec!["AAPL", "JNJ"]);
    }

    #[tokio::test]
    async fn test_refresh_merges_prices() {
        let provider = MockProvider::returning(Ok(vec![
            quote("AAPL", dec!(190.5)),
            quote("JNJ", dec!(155)),
        ]));
        let mut board = PriceBoard::new();

        let updated = board.refresh(&provider, &default_positions()).await;

        assert_eq!(updated, 2);
        assert_eq!(board.price("aapl"), Some(dec!(190.5)));
        assert_eq!(board.price("JNJ"), Some(dec!(155)));
        assert!(board.last_updated().is_some());
        assert_eq!(*provider.requested.lock().unwrap(), vec!["AAPL", "JNJ"]);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_prices() {
        let mut board = PriceBoard::new();
        let ok = MockProvider::returning(Ok(vec![quote("AAPL", dec!(190.5))]));
        board.refresh(&ok, &default_positions()).await;
        let stamp = board.last_updated();

        let failing = MockProvider::returning(Err(MarketDataError::Timeout {
            provider: "MOCK".to_string(),
        }));
        let updated = board.refresh(&failing, &default_positions()).await;

        assert_eq!(updated, 0);
        assert_eq!(board.price("AAPL"), Some(dec!(190.5)));
        assert_eq!(board.last_updated(), stamp);
    }

    #[tokio::test]
    async fn test_no_tickers_no_request() {
        let provider = MockProvider::returning(Ok(vec![quote("AAPL", dec!(1))]));
        let mut board = PriceBoard::new();
        assert_eq!(board.refresh(&provider, &[]).await, 0);
        assert!(provider.requested.lock().unwrap().is_empty());
        assert!(board.is_empty());
    }
}
