mod portfolio;
mod price_point;
mod valuation;

pub use portfolio::{Holding, HoldingsFile, Lot, SymbolListFile, TrackedSymbol};
pub use price_point::{ClosingPrice, StockQuote};
pub use valuation::{PortfolioSummary, StockDetails, SymbolBreakdown, SymbolPosition};
