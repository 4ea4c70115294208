use tracing::{error, warn};

use crate::errors::AppError;
use crate::external::price_provider::PriceProvider;
use crate::models::{Holding, StockDetails, StockQuote, TrackedSymbol};
use crate::services::valuation_service;

pub const PRICE_UNAVAILABLE: &str = "Price data is not available";
pub const PRICE_FETCH_FAILED: &str = "An error occurred while fetching the price data";

/// Latest close for every tracked symbol, in file order. A symbol that cannot
/// be priced gets an error entry instead; the others are unaffected.
pub async fn list_quotes(provider: &dyn PriceProvider, symbols: &[TrackedSymbol]) -> Vec<StockQuote> {
    let mut quotes = Vec::with_capacity(symbols.len());

    for tracked in symbols {
        let symbol = tracked.symbol.clone();
        let quote = match provider.get_latest_close(&symbol).await {
            Ok(Some(price)) => StockQuote::Priced { symbol, price },
            Ok(None) => {
                warn!("No price data available for {}", symbol);
                StockQuote::Unavailable { symbol, error: PRICE_UNAVAILABLE.to_string() }
            }
            Err(e) => {
                error!("Error fetching price for {}: {}", symbol, e);
                StockQuote::Unavailable { symbol, error: PRICE_FETCH_FAILED.to_string() }
            }
        };
        quotes.push(quote);
    }

    quotes
}

/// Position, ROI and the last year of monthly closes for one symbol.
pub async fn stock_details(
    provider: &dyn PriceProvider,
    holdings: &[Holding],
    symbol: &str,
) -> Result<StockDetails, AppError> {
    let position = valuation_service::value_symbol(provider, holdings, symbol).await?;
    let (total_shares, current_value) = position.total_amount();
    let closing_prices = provider.get_last_12_monthly_closes(symbol).await?;

    Ok(StockDetails {
        symbol: symbol.to_string(),
        total_shares,
        current_value,
        roi: position.roi(),
        closing_prices,
    })
}
