use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
    tracked_symbols: usize,
    holdings: usize,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
}

// Never calls upstream; only reports what was loaded at startup.
async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    info!("GET /health - Health check");
    Json(HealthStatus {
        status: "OK",
        tracked_symbols: state.portfolio.symbols().len(),
        holdings: state.portfolio.holdings().len(),
    })
}
