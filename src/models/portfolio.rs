use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// One purchase of a stock: the amount put in on a given trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub invested: f64,
    pub date: NaiveDate,
}

// All lots bought for one ticker, in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub investments: Vec<Lot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedSymbol {
    pub symbol: String,
}

/// Shape of the tracked-symbols file: `{"stocks": [{"symbol": "AAPL"}]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolListFile {
    pub stocks: Vec<TrackedSymbol>,
}

/// Shape of the lots file: `{"investments": [{"symbol": "AAPL", "investments": [...]}]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoldingsFile {
    pub investments: Vec<Holding>,
}
