use std::sync::Arc;

use crate::external::price_provider::PriceProvider;
use crate::store::PortfolioStore;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<PortfolioStore>,
    pub price_provider: Arc<dyn PriceProvider>,
}
