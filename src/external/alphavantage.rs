use crate::config::AppConfig;
use crate::external::price_provider::{PriceProvider, PriceProviderError};
use crate::models::ClosingPrice;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

const MONTHS_OF_HISTORY: usize = 12;

pub struct AlphaVantageProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AlphaVantageProvider {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_key.clone(), config.api_base_url.as_str())
    }

    async fn fetch_series(
        &self,
        function: &str,
        symbol: &str,
        outputsize: Option<&str>,
    ) -> Result<AvSeriesResponse, PriceProviderError> {
        let mut params = vec![
            ("function", function),
            ("symbol", symbol),
            ("apikey", self.api_key.as_str()),
        ];
        if let Some(size) = outputsize {
            params.push(("outputsize", size));
        }

        debug!("Alpha Vantage {} request for {}", function, symbol);

        let resp = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| PriceProviderError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PriceProviderError::Status(status.as_u16()));
        }

        let body = resp
            .json::<AvSeriesResponse>()
            .await
            .map_err(|e| PriceProviderError::Parse(e.to_string()))?;

        body.log_upstream_message(symbol);
        Ok(body)
    }

    /// Daily series, or `None` when the upstream answered with a non-200
    /// status or without a series.
    async fn daily_series(
        &self,
        symbol: &str,
        outputsize: &str,
    ) -> Result<Option<BTreeMap<NaiveDate, f64>>, PriceProviderError> {
        match self.fetch_series("TIME_SERIES_DAILY", symbol, Some(outputsize)).await {
            Ok(body) => body.daily.map(parse_series).transpose(),
            Err(PriceProviderError::Status(code)) => {
                warn!("Daily series request for {} returned status {}", symbol, code);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AvSeriesResponse {
    #[serde(rename = "Time Series (Daily)")]
    daily: Option<BTreeMap<String, AvBar>>,

    #[serde(rename = "Monthly Time Series")]
    monthly: Option<BTreeMap<String, AvBar>>,

    // Throttled: { "Note": "Thank you for using Alpha Vantage! ..." }
    #[serde(rename = "Note")]
    note: Option<String>,

    // Daily quota exhausted on the free tier
    #[serde(rename = "Information")]
    information: Option<String>,

    // Unknown symbol: { "Error Message": "Invalid API call. ..." }
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
}

impl AvSeriesResponse {
    fn log_upstream_message(&self, symbol: &str) {
        if let Some(note) = &self.note {
            warn!("Alpha Vantage throttled request for {}: {}", symbol, note);
        }
        if let Some(info) = &self.information {
            warn!("Alpha Vantage information for {}: {}", symbol, info);
        }
        if let Some(msg) = &self.error_message {
            warn!("Alpha Vantage rejected request for {}: {}", symbol, msg);
        }
    }
}

#[derive(Debug, Deserialize)]
struct AvBar {
    #[serde(rename = "4. close")]
    close: String,
}

// Keys are "YYYY-MM-DD" strings; re-keying by NaiveDate keeps BTreeMap order chronological.
fn parse_series(
    raw: BTreeMap<String, AvBar>,
) -> Result<BTreeMap<NaiveDate, f64>, PriceProviderError> {
    raw.into_iter()
        .map(|(date_str, bar)| {
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                .map_err(|e| PriceProviderError::Parse(format!("{}: {}", date_str, e)))?;
            let close = bar
                .close
                .parse::<f64>()
                .map_err(|e| PriceProviderError::Parse(format!("{}: {}", date_str, e)))?;
            Ok((date, close))
        })
        .collect()
}

#[async_trait]
impl PriceProvider for AlphaVantageProvider {
    async fn get_latest_close(&self, symbol: &str) -> Result<Option<f64>, PriceProviderError> {
        let series = self.daily_series(symbol, "compact").await?;
        Ok(series.and_then(|s| s.values().next_back().copied()))
    }

    async fn get_close_on_date(
        &self,
        symbol: &str,
        date: NaiveDate,
    ) -> Result<Option<f64>, PriceProviderError> {
        // Only the full output reaches back far enough for old purchase dates.
        let series = self.daily_series(symbol, "full").await?;
        Ok(series.and_then(|s| s.get(&date).copied()))
    }

    async fn get_last_12_monthly_closes(
        &self,
        symbol: &str,
    ) -> Result<Vec<ClosingPrice>, PriceProviderError> {
        let body = self.fetch_series("TIME_SERIES_MONTHLY", symbol, None).await?;

        let Some(raw) = body.monthly else {
            return Ok(Vec::new());
        };

        let closes = parse_series(raw)?
            .into_iter()
            .rev()
            .take(MONTHS_OF_HISTORY)
            .map(|(date, price)| ClosingPrice { date, price })
            .collect();

        Ok(closes)
    }
}
