use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use thiserror::Error;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "https://www.alphavantage.co/query";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://192.168.0.15:3000";
const DEFAULT_PORTFOLIO_FILE: &str = "stock_portfolio.json";
const DEFAULT_PORTFOLIO_DETAILS_FILE: &str = "stock_portfolio_details.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base_url: Url,
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<HeaderValue>,
    pub portfolio_file: PathBuf,
    pub portfolio_details_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; `from_env` reads the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        let api_key = lookup("ALPHAVANTAGE_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("ALPHAVANTAGE_API_KEY"))?;

        let api_base_url = Url::parse(&get("ALPHAVANTAGE_BASE_URL", DEFAULT_API_BASE_URL))
            .map_err(|e| ConfigError::Invalid {
                var: "ALPHAVANTAGE_BASE_URL",
                reason: e.to_string(),
            })?;

        let bind_addr = get("BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let allowed_origins = parse_origins(&get("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS))?;

        Ok(Self {
            api_key,
            api_base_url,
            bind_addr,
            allowed_origins,
            portfolio_file: get("PORTFOLIO_FILE", DEFAULT_PORTFOLIO_FILE).into(),
            portfolio_details_file: get("PORTFOLIO_DETAILS_FILE", DEFAULT_PORTFOLIO_DETAILS_FILE)
                .into(),
        })
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                var: "ALLOWED_ORIGINS",
                reason: format!("{}: {}", origin, e),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = AppConfig::from_lookup(lookup(&[("ALPHAVANTAGE_API_KEY", "demo")])).unwrap();

        assert_eq!(config.api_key, "demo");
        assert_eq!(config.api_base_url.as_str(), DEFAULT_API_BASE_URL);
        assert_eq!(config.bind_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.allowed_origins,
            vec![
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://192.168.0.15:3000"),
            ]
        );
        assert_eq!(config.portfolio_file, PathBuf::from("stock_portfolio.json"));
        assert_eq!(
            config.portfolio_details_file,
            PathBuf::from("stock_portfolio_details.json")
        );
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("ALPHAVANTAGE_API_KEY")));
    }

    #[test]
    fn origins_are_trimmed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ALPHAVANTAGE_API_KEY", "demo"),
            ("ALLOWED_ORIGINS", " http://a.test , http://b.test,"),
        ]))
        .unwrap();

        assert_eq!(config.allowed_origins.len(), 2);
        assert_eq!(config.allowed_origins[0], "http://a.test");
        assert_eq!(config.allowed_origins[1], "http://b.test");
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("ALPHAVANTAGE_API_KEY", "demo"),
            ("BIND_ADDR", "not-an-addr"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "BIND_ADDR", .. }));
    }
}
