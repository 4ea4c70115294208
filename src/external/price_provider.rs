use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::ClosingPrice;

#[derive(Debug, Error)]
pub enum PriceProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API request failed with status code {0}")]
    Status(u16),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Source of closing prices for a ticker.
///
/// Missing data (an unknown date, an empty series, a non-200 reply on the
/// daily lookups) is `Ok(None)`. `Err` is reserved for failures the caller
/// cannot treat as "no price".
#[async_trait]
pub trait PriceProvider: Send + Sync {
    async fn get_latest_close(&self, symbol: &str) -> Result<Option<f64>, PriceProviderError>;

    async fn get_close_on_date(
        &self,
        symbol: &str,
        date: NaiveDate,
    ) -> Result<Option<f64>, PriceProviderError>;

    /// Most recent first, at most 12 entries.
    async fn get_last_12_monthly_closes(
        &self,
        symbol: &str,
    ) -> Result<Vec<ClosingPrice>, PriceProviderError>;
}
