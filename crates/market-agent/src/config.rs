//! Configuration for the market data tools

use crate::error::{MarketError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Default Alpha Vantage query endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Default model the agent descriptor advertises
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default agent name
pub const DEFAULT_AGENT_NAME: &str = "stock_market_agent";

/// Configuration for the market data tools
///
/// Loaded once at startup and shared read-only (usually behind an `Arc`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Alpha Vantage API key
    #[serde(skip_serializing)]
    pub alpha_vantage_api_key: String,

    /// Alpha Vantage query endpoint
    pub base_url: String,

    /// Timeout applied to every outbound request
    pub request_timeout: Duration,

    /// Maximum entries per market movers list
    pub max_movers: usize,

    /// Model identifier advertised by the agent descriptor
    pub model: String,

    /// Agent name advertised by the agent descriptor
    pub agent_name: String,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            alpha_vantage_api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(5),
            max_movers: 10,
            model: DEFAULT_MODEL.to_string(),
            agent_name: DEFAULT_AGENT_NAME.to_string(),
        }
    }
}

impl MarketConfig {
    /// Create a new configuration builder
    pub fn builder() -> MarketConfigBuilder {
        MarketConfigBuilder::default()
    }

    /// Load and validate the configuration from the process environment
    ///
    /// | variable | field |
    /// |----------|-------|
    /// | `ALPHA_VANTAGE_API_KEY` | `alpha_vantage_api_key` (required) |
    /// | `ALPHA_VANTAGE_BASE_URL` | `base_url` |
    /// | `MARKET_AGENT_TIMEOUT_SECS` | `request_timeout` |
    /// | `MARKET_AGENT_MAX_MOVERS` | `max_movers` |
    /// | `MARKET_AGENT_MODEL` | `model` |
    /// | `MARKET_AGENT_NAME` | `agent_name` |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load and validate the configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Self::builder();

        if let Some(key) = lookup("ALPHA_VANTAGE_API_KEY") {
            builder = builder.alpha_vantage_api_key(key);
        }
        if let Some(url) = lookup("ALPHA_VANTAGE_BASE_URL") {
            builder = builder.base_url(url);
        }
        if let Some(secs) = lookup("MARKET_AGENT_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                MarketError::Config(format!("MARKET_AGENT_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }
        if let Some(max) = lookup("MARKET_AGENT_MAX_MOVERS") {
            let max: usize = max.trim().parse().map_err(|_| {
                MarketError::Config(format!("MARKET_AGENT_MAX_MOVERS is not a number: {max}"))
            })?;
            builder = builder.max_movers(max);
        }
        if let Some(model) = lookup("MARKET_AGENT_MODEL") {
            builder = builder.model(model);
        }
        if let Some(name) = lookup("MARKET_AGENT_NAME") {
            builder = builder.agent_name(name);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.alpha_vantage_api_key.trim().is_empty() {
            return Err(MarketError::Config(
                "ALPHA_VANTAGE_API_KEY is required".to_string(),
            ));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| MarketError::Config(format!("invalid base_url '{}': {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(MarketError::Config(format!(
                "base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(MarketError::Config(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        if self.max_movers == 0 {
            return Err(MarketError::Config(
                "max_movers must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for MarketConfig
#[derive(Debug, Default)]
pub struct MarketConfigBuilder {
    alpha_vantage_api_key: Option<String>,
    base_url: Option<String>,
    request_timeout: Option<Duration>,
    max_movers: Option<usize>,
    model: Option<String>,
    agent_name: Option<String>,
}

impl MarketConfigBuilder {
    /// Set Alpha Vantage API key
    pub fn alpha_vantage_api_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_api_key = Some(key.into());
        self
    }

    /// Set the query endpoint (useful for pointing at a stub server)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the maximum entries per movers list
    pub fn max_movers(mut self, max: usize) -> Self {
        self.max_movers = Some(max);
        self
    }

    /// Set the advertised model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the advertised agent name
    pub fn agent_name(mut self, name: impl Into<String>) -> Self {
        self.agent_name = Some(name.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<MarketConfig> {
        let defaults = MarketConfig::default();

        let config = MarketConfig {
            alpha_vantage_api_key: self
                .alpha_vantage_api_key
                .map(|k| k.trim().to_string())
                .unwrap_or(defaults.alpha_vantage_api_key),
            base_url: self.base_url.unwrap_or(defaults.base_url),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            max_movers: self.max_movers.unwrap_or(defaults.max_movers),
            model: self.model.unwrap_or(defaults.model),
            agent_name: self.agent_name.unwrap_or(defaults.agent_name),
        };

        config.validate()?;
        Ok(config)
    }
}
