use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::external::price_provider::{PriceProvider, PriceProviderError};
use crate::models::ClosingPrice;

/// In-memory provider for tests. Unknown symbols and dates have no price;
/// symbols marked as failing return a network error on every call.
#[derive(Default)]
pub struct MockPriceProvider {
    latest: HashMap<String, f64>,
    history: HashMap<(String, NaiveDate), f64>,
    monthly: HashMap<String, Vec<ClosingPrice>>,
    failing: HashSet<String>,
}

impl MockPriceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latest(mut self, symbol: &str, price: f64) -> Self {
        self.latest.insert(symbol.to_string(), price);
        self
    }

    pub fn with_close(mut self, symbol: &str, date: &str, price: f64) -> Self {
        self.history.insert((symbol.to_string(), date_of(date)), price);
        self
    }

    pub fn with_monthly(mut self, symbol: &str, closes: Vec<ClosingPrice>) -> Self {
        self.monthly.insert(symbol.to_string(), closes);
        self
    }

    pub fn failing(mut self, symbol: &str) -> Self {
        self.failing.insert(symbol.to_string());
        self
    }

    fn check(&self, symbol: &str) -> Result<(), PriceProviderError> {
        if self.failing.contains(symbol) {
            return Err(PriceProviderError::Network(format!("connection refused for {}", symbol)));
        }
        Ok(())
    }
}

pub fn date_of(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
}

#[async_trait]
impl PriceProvider for MockPriceProvider {
    async fn get_latest_close(&self, symbol: &str) -> Result<Option<f64>, PriceProviderError> {
        self.check(symbol)?;
        Ok(self.latest.get(symbol).copied())
    }

    async fn get_close_on_date(
        &self,
        symbol: &str,
        date: NaiveDate,
    ) -> Result<Option<f64>, PriceProviderError> {
        self.check(symbol)?;
        Ok(self.history.get(&(symbol.to_string(), date)).copied())
    }

    async fn get_last_12_monthly_closes(
        &self,
        symbol: &str,
    ) -> Result<Vec<ClosingPrice>, PriceProviderError> {
        self.check(symbol)?;
        Ok(self.monthly.get(symbol).cloned().unwrap_or_default())
    }
}
