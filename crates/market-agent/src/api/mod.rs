//! API clients for market data providers

pub mod alpha_vantage;

pub use alpha_vantage::AlphaVantageClient;
