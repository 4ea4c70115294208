use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::PortfolioSummary;
use crate::services::valuation_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_portfolio_summary))
}

pub async fn get_portfolio_summary(
    State(state): State<AppState>
) -> Result<Json<PortfolioSummary>, AppError> {
    info!("GET /api/portfolio - Calculating portfolio value and ROI");
    let summary = valuation_service::calculate_portfolio_value_and_roi(
        state.price_provider.as_ref(),
        state.portfolio.holdings(),
    ).await
        .map_err(|e| {
            error!("Failed to calculate portfolio summary: {}", e);
            e
        })?;
    Ok(Json(summary))
}
