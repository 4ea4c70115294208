pub mod stock_service;
pub mod valuation_service;
