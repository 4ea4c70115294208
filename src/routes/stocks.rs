use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{StockDetails, StockQuote};
use crate::services::stock_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_stocks))
}

pub fn details_router() -> Router<AppState> {
    Router::new()
        .route("/:symbol", get(get_stock_details))
}

pub async fn get_stocks(
    State(state): State<AppState>
) -> Json<Vec<StockQuote>> {
    info!("GET /api/stocks - Fetching latest prices for {} symbols", state.portfolio.symbols().len());
    let quotes = stock_service::list_quotes(
        state.price_provider.as_ref(),
        state.portfolio.symbols(),
    ).await;
    Json(quotes)
}

pub async fn get_stock_details(
    Path(symbol): Path<String>,
    State(state): State<AppState>
) -> Result<(StatusCode, Json<StockDetails>), AppError> {
    info!("GET /api/stock-details/{} - Getting stock details", symbol);
    let details = stock_service::stock_details(
        state.price_provider.as_ref(),
        state.portfolio.holdings(),
        &symbol,
    ).await
        .map_err(|e| {
            error!("Error getting stock details for {}: {}", symbol, e);
            e
        })?;
    Ok((StatusCode::OK, Json(details)))
}
