use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::routes::{health, portfolio, stocks};
use crate::state::AppState;

pub fn create_app(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET]);

    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/portfolio", portfolio::router())
        .nest("/api/stocks", stocks::router())
        .nest("/api/stock-details", stocks::details_router())
        .layer(cors)
        .with_state(state)
}
