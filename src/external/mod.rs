pub mod alphavantage;
pub mod price_provider;

#[cfg(test)]
pub mod mock_provider;
