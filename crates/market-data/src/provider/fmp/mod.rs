//! Financial Modeling Prep (FMP) quote provider.
//!
//! Uses the batch quote endpoint, which accepts a comma-joined list of
//! symbols in the path and returns one JSON object per known symbol:
//!
//! ```text
//! GET /api/v3/quote/AAPL,JNJ?apikey=...
//! [{"symbol":"AAPL","price":189.84,"timestamp":1718900000,...}, ...]
//! ```
//!
//! API documentation: https://site.financialmodelingprep.com/developer/docs

use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::{Client, Url};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::QuoteProvider;

const BASE_URL: &str = "https://financialmodelingprep.com";
const PROVIDER_ID: &str = "FMP";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// API Response Structures
// ============================================================================

/// One entry of the /api/v3/quote response
#[derive(Debug, Deserialize)]
struct QuoteItem {
    symbol: String,
    /// Latest price; null for delisted or unpriced symbols
    price: Option<f64>,
    /// Timestamp (Unix seconds)
    timestamp: Option<i64>,
    // Note: name, changesPercentage, dayLow, dayHigh, volume, ... exist but are not used
}

/// Error body returned by FMP (also sent with HTTP 200 on some plans)
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
}

// ============================================================================
// FmpProvider
// ============================================================================

/// Financial Modeling Prep batch quote provider.
///
/// # Example
///
/// ```ignore
/// use dca_tracker_market_data::FmpProvider;
///
/// let provider = FmpProvider::new("your_api_key".to_string());
/// ```
pub struct FmpProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FmpProvider {
    /// Create a new FMP provider with the given API key.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    /// Create a provider that talks to a different host (proxies, tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url,
        }
    }

    fn provider_error(message: impl Into<String>) -> MarketDataError {
        MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: message.into(),
        }
    }

    /// Build the batch quote URL for the given symbols.
    fn quote_url(&self, symbols: &[String]) -> Result<Url, MarketDataError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Self::provider_error(format!("Invalid base URL: {}", e)))?;

        let joined = symbols.join(",");
        url.path_segments_mut()
            .map_err(|_| Self::provider_error("Base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(&["api", "v3", "quote", joined.as_str()]);

        url.query_pairs_mut().append_pair("apikey", &self.api_key);
        Ok(url)
    }

    /// Make the GET request and return the raw body.
    async fn fetch(&self, url: Url) -> Result<String, MarketDataError> {
        debug!("FMP request: {}", url.path());

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Self::provider_error("Invalid or missing API key"));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::provider_error(format!("HTTP {} - {}", status, body)));
        }

        response
            .text()
            .await
            .map_err(|e| Self::provider_error(format!("Failed to read response: {}", e)))
    }
}

/// Parse a batch quote body into quotes, skipping entries without a price.
fn parse_quotes(body: &str) -> Result<Vec<Quote>, MarketDataError> {
    let items: Vec<QuoteItem> = match serde_json::from_str(body) {
        Ok(items) => items,
        Err(parse_err) => {
            if let Ok(ErrorResponse {
                error_message: Some(message),
            }) = serde_json::from_str::<ErrorResponse>(body)
            {
                return Err(FmpProvider::provider_error(message));
            }
            return Err(FmpProvider::provider_error(format!(
                "Failed to parse quote response: {}",
                parse_err
            )));
        }
    };

    let mut quotes = Vec::with_capacity(items.len());
    for item in items {
        let Some(price) = item.price else {
            warn!("FMP returned no price for {}", item.symbol);
            continue;
        };
        let Ok(price) = Decimal::try_from(price) else {
            warn!("FMP returned an invalid price for {}: {}", item.symbol, price);
            continue;
        };
        let timestamp = item
            .timestamp
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
            .unwrap_or_else(Utc::now);

        quotes.push(Quote::new(
            item.symbol,
            price,
            timestamp,
            PROVIDER_ID.to_string(),
        ));
    }

    Ok(quotes)
}

#[async_trait]
impl QuoteProvider for FmpProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_prices(&self, symbols: &[String]) -> Result<Vec<Quote>, MarketDataError> {
        if symbols.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.quote_url(symbols)?;
        let body = self.fetch(url).await?;
        let quotes = parse_quotes(&body)?;

        debug!(
            "FMP returned {} quotes for {} symbols",
            quotes.len(),
            symbols.len()
        );
        Ok(quotes)
    }
}
