//! Configuration management utilities

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Process-level configuration shared by binaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application name
    pub app_name: String,
    /// Environment (development, production, ...)
    pub environment: String,
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Log line format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "market-agent".to_string(),
            environment: "development".to_string(),
            log_filter: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Read `APP_ENV`, `RUST_LOG` and `LOG_FORMAT` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    ///
    /// Unknown `LOG_FORMAT` values fall back to text output.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            app_name: defaults.app_name,
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            log_format: lookup("LOG_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_format),
        }
    }

    /// Set the application name
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }
}

/// Load variables from a `.env` file in the working directory or its parents
///
/// A missing file is not an error. Returns whether a file was loaded.
pub fn load_dotenv() -> bool {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            true
        }
        Err(_) => false,
    }
}
