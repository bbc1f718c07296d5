//! Logging and tracing utilities

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, LogFormat};

/// Failure to install the global subscriber
#[derive(Debug, Error)]
#[error("Failed to initialize tracing: {0}")]
pub struct LoggingError(String);

/// Initialize tracing subscriber with default configuration
pub fn init_tracing() {
    init_tracing_with(&Config::default());
}

/// Initialize tracing from a [`Config`], ignoring an already installed subscriber
pub fn init_tracing_with(config: &Config) {
    if let Err(e) = try_init_tracing_with(config) {
        eprintln!("{e}");
    }
}

/// Initialize tracing from a [`Config`]
///
/// `RUST_LOG` takes precedence over `config.log_filter`. Logs go to stderr so
/// that tool output on stdout stays machine readable.
pub fn try_init_tracing_with(config: &Config) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.log_format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| LoggingError(e.to_string()))?;
    log_startup(config);
    Ok(())
}

/// Record which application and environment the process runs as
fn log_startup(config: &Config) {
    tracing::info!(
        app = %config.app_name,
        environment = %config.environment,
        format = ?config.log_format,
        "Tracing initialized"
    );
}
