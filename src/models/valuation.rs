use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::ClosingPrice;

/// Per-symbol figures in the portfolio summary, aggregated over every priced lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolBreakdown {
    /// Average cost per share across the symbol's lots.
    pub purchase_price: f64,
    pub current_price: f64,
    pub shares_bought: f64,
    pub current_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_portfolio_value: f64,
    pub roi: f64,
    pub graph_data: BTreeMap<String, SymbolBreakdown>,
}

/// Valued lots of a single symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SymbolPosition {
    pub invested: f64,
    pub total_shares: f64,
    pub current_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockDetails {
    pub symbol: String,
    pub total_shares: f64,
    pub current_value: f64,
    pub roi: f64,
    pub closing_prices: Vec<ClosingPrice>,
}
