//! Error types for market data operations

use std::time::Duration;
use thiserror::Error;

/// Market data specific errors
#[derive(Debug, Error)]
pub enum MarketError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ticker symbol failed normalization
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Tool arguments did not match the schema
    #[error("{0}")]
    InvalidArguments(String),

    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The provider did not answer in time
    #[error("Request timed out after {}s", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    /// The provider answered with a non-success HTTP status
    #[error("API request failed with status code {status}")]
    HttpStatus { status: u16 },

    /// The provider reported an error payload
    #[error("Alpha Vantage error: {0}")]
    Provider(String),

    /// Request quota exhausted
    #[error("Alpha Vantage rate limit reached: {0}")]
    RateLimited(String),

    /// No data for the requested symbol
    #[error("No data found for symbol {symbol}")]
    NotFound { symbol: String },

    /// Response JSON lacked expected fields or held unparsable values
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Report template failed to render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Result type alias for market operations
pub type Result<T> = std::result::Result<T, MarketError>;

impl MarketError {
    /// Classify a transport error from reqwest
    ///
    /// The URL is stripped because it carries the API key.
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout }
        } else {
            Self::Network(err.without_url())
        }
    }
}

/// Convert MarketError to agent_core::Error
impl From<MarketError> for agent_core::Error {
    fn from(err: MarketError) -> Self {
        match err {
            MarketError::InvalidArguments(msg) => agent_core::Error::InvalidArguments(msg),
            MarketError::Config(_) => agent_core::Error::InitializationFailed(err.to_string()),
            other => agent_core::Error::ToolFailed(other.to_string()),
        }
    }
}
