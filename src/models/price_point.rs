use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// A close price on a given date (month end for monthly series).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosingPrice {
    pub date: NaiveDate,
    pub price: f64,
}

/// One entry of the `/api/stocks` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StockQuote {
    Priced { symbol: String, price: f64 },
    Unavailable { symbol: String, error: String },
}
