use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::external::price_provider::PriceProvider;
use crate::models::{Holding, Lot, PortfolioSummary, SymbolBreakdown, SymbolPosition};

/// Shares bought with `invested` at `purchase_price`.
///
/// `None` when the price cannot be divided by: zero, negative, NaN or infinite.
pub fn shares_for(invested: f64, purchase_price: f64) -> Option<f64> {
    if purchase_price.is_finite() && purchase_price > 0.0 {
        Some(invested / purchase_price)
    } else {
        None
    }
}

/// Return on investment in percent; 0 when nothing was invested.
pub fn roi_percent(invested: f64, current_value: f64) -> f64 {
    if invested > 0.0 {
        (current_value - invested) / invested * 100.0
    } else {
        0.0
    }
}

impl SymbolPosition {
    /// `(total_shares, current_value)` for the symbol.
    pub fn total_amount(&self) -> (f64, f64) {
        (self.total_shares, self.current_value)
    }

    pub fn roi(&self) -> f64 {
        roi_percent(self.invested, self.current_value)
    }

    fn add_lot(&mut self, invested: f64, shares: f64, current_price: f64) {
        self.invested += invested;
        self.total_shares += shares;
        self.current_value += shares * current_price;
    }
}

/// Values `lots` of `symbol` at `current_price`. Lots whose purchase date has
/// no close price are skipped.
async fn value_lots(
    provider: &dyn PriceProvider,
    symbol: &str,
    lots: &[&Lot],
    current_price: f64,
) -> Result<SymbolPosition, AppError> {
    let mut position = SymbolPosition::default();

    for lot in lots {
        let Some(purchase_price) = provider.get_close_on_date(symbol, lot.date).await? else {
            warn!(
                "Missing historical price data for {} on {}. Skipping this investment.",
                symbol, lot.date
            );
            continue;
        };

        let Some(shares) = shares_for(lot.invested, purchase_price) else {
            warn!(
                "Unusable purchase price {} for {} on {}. Skipping this investment.",
                purchase_price, symbol, lot.date
            );
            continue;
        };

        debug!(
            "{} lot on {}: {} invested at {} = {} shares",
            symbol, lot.date, lot.invested, purchase_price, shares
        );
        position.add_lot(lot.invested, shares, current_price);
    }

    Ok(position)
}

/// Values every holding at today's close.
///
/// Symbols without a current price and lots without a purchase-date price are
/// left out; the result covers whatever could be priced. Upstream calls are
/// sequential: one latest-close fetch per holding, one history fetch per lot.
pub async fn calculate_portfolio_value_and_roi(
    provider: &dyn PriceProvider,
    holdings: &[Holding],
) -> Result<PortfolioSummary, AppError> {
    let mut positions: BTreeMap<String, (SymbolPosition, f64)> = BTreeMap::new();

    for holding in holdings {
        let symbol = holding.symbol.as_str();

        let Some(current_price) = provider.get_latest_close(symbol).await? else {
            warn!("Current price for {} is not available. Skipping this investment.", symbol);
            continue;
        };

        let lots: Vec<&Lot> = holding.investments.iter().collect();
        let valued = value_lots(provider, symbol, &lots, current_price).await?;
        if valued.total_shares <= 0.0 {
            continue;
        }

        let entry = positions
            .entry(holding.symbol.clone())
            .or_insert((SymbolPosition::default(), current_price));
        entry.0.invested += valued.invested;
        entry.0.total_shares += valued.total_shares;
        entry.0.current_value += valued.current_value;
    }

    let total_invested: f64 = positions.values().map(|(p, _)| p.invested).sum();
    let total_current_value: f64 = positions.values().map(|(p, _)| p.current_value).sum();

    let graph_data = positions
        .into_iter()
        .map(|(symbol, (position, current_price))| {
            let breakdown = SymbolBreakdown {
                purchase_price: position.invested / position.total_shares,
                current_price,
                shares_bought: position.total_shares,
                current_value: position.current_value,
            };
            (symbol, breakdown)
        })
        .collect();

    Ok(PortfolioSummary {
        total_portfolio_value: total_current_value,
        roi: roi_percent(total_invested, total_current_value),
        graph_data,
    })
}

/// Values all lots held for `symbol`, fetching its current price once.
///
/// A symbol with no lots, or without a current price, is an empty position.
pub async fn value_symbol(
    provider: &dyn PriceProvider,
    holdings: &[Holding],
    symbol: &str,
) -> Result<SymbolPosition, AppError> {
    let lots: Vec<&Lot> = holdings
        .iter()
        .filter(|h| h.symbol == symbol)
        .flat_map(|h| h.investments.iter())
        .collect();

    if lots.is_empty() {
        debug!("No lots held for {}", symbol);
        return Ok(SymbolPosition::default());
    }

    let Some(current_price) = provider.get_latest_close(symbol).await? else {
        warn!("Current price for {} is not available. Skipping {} lots.", symbol, lots.len());
        return Ok(SymbolPosition::default());
    };

    value_lots(provider, symbol, &lots, current_price).await
}
