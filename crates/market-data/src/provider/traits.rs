//! Quote provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for live quote providers.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use dca_tracker_market_data::{MarketDataError, Quote, QuoteProvider};
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl QuoteProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn latest_prices(&self, symbols: &[String]) -> Result<Vec<Quote>, MarketDataError> {
///         // ...
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "FMP".
    ///
    /// Used for logging and as the `source` of returned quotes.
    fn id(&self) -> &'static str;

    /// Fetch the latest price for every symbol in a single request.
    ///
    /// Unknown symbols are omitted from the result rather than failing the
    /// whole batch. An empty `symbols` slice yields an empty result.
    async fn latest_prices(&self, symbols: &[String]) -> Result<Vec<Quote>, MarketDataError>;
}
