mod app;
mod config;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::external::alphavantage::AlphaVantageProvider;
use crate::logging::LoggingConfig;
use crate::state::AppState;
use crate::store::PortfolioStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let config = AppConfig::from_env().context("invalid configuration")?;

    let portfolio = PortfolioStore::load(&config.portfolio_file, &config.portfolio_details_file)
        .context("failed to load portfolio files")?;

    tracing::info!("📊 Using price provider: Alpha Vantage at {}", config.api_base_url);
    let state = AppState {
        portfolio: Arc::new(portfolio),
        price_provider: Arc::new(AlphaVantageProvider::from_config(&config)),
    };
    let app = app::create_app(state, config.allowed_origins.clone());

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("🚀 Stock dashboard backend running at http://{}/", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
