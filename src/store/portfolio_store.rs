use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::models::{Holding, HoldingsFile, SymbolListFile, TrackedSymbol};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Tracked symbols and their lots, loaded once at startup and never written.
#[derive(Debug, Clone, Default)]
pub struct PortfolioStore {
    symbols: Vec<TrackedSymbol>,
    holdings: Vec<Holding>,
}

impl PortfolioStore {
    pub fn new(symbols: Vec<TrackedSymbol>, holdings: Vec<Holding>) -> Self {
        Self { symbols, holdings }
    }

    pub fn load(symbols_path: &Path, holdings_path: &Path) -> Result<Self, StoreError> {
        let symbols: SymbolListFile = read_json(symbols_path)?;
        let holdings: HoldingsFile = read_json(holdings_path)?;

        info!(
            "Loaded {} tracked symbols and {} holdings ({} lots)",
            symbols.stocks.len(),
            holdings.investments.len(),
            holdings.investments.iter().map(|h| h.investments.len()).sum::<usize>()
        );

        Ok(Self::new(symbols.stocks, holdings.investments))
    }

    pub fn symbols(&self) -> &[TrackedSymbol] {
        &self.symbols
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_both_documents() {
        let symbols = write_file(r#"{"stocks": [{"symbol": "AAPL"}, {"symbol": "MSFT"}]}"#);
        let holdings = write_file(
            r#"{"investments": [
                {"symbol": "AAPL", "investments": [
                    {"invested": 100, "date": "2023-01-03"},
                    {"invested": 250.5, "date": "2023-06-01"}
                ]}
            ]}"#,
        );

        let store = PortfolioStore::load(symbols.path(), holdings.path()).unwrap();

        let names: Vec<_> = store.symbols().iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(names, ["AAPL", "MSFT"]);
        assert_eq!(store.holdings().len(), 1);

        let lots = &store.holdings()[0].investments;
        assert_eq!(lots.len(), 2);
        assert_eq!(lots[0].invested, 100.0);
        assert_eq!(lots[0].date, NaiveDate::from_ymd_opt(2023, 1, 3).unwrap());
        assert_eq!(lots[1].invested, 250.5);
    }

    #[test]
    fn missing_file_reports_path() {
        let holdings = write_file(r#"{"investments": []}"#);
        let missing = Path::new("/nonexistent/stock_portfolio.json");

        let err = PortfolioStore::load(missing, holdings.path()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(err.to_string().contains("stock_portfolio.json"));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let symbols = write_file(r#"{"stocks": []}"#);
        let holdings = write_file(
            r#"{"investments": [{"symbol": "AAPL", "investments": [{"invested": 1, "date": "03/01/2023"}]}]}"#,
        );

        let err = PortfolioStore::load(symbols.path(), holdings.path()).unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
    }
}
