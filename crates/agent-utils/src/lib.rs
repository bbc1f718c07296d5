//! Shared utilities for the market agent
//!
//! This crate provides common functionality used across the workspace,
//! including logging setup, `.env` loading and process-level configuration.

pub mod config;
pub mod logging;

pub use config::{Config, LogFormat, load_dotenv};
pub use logging::{LoggingError, init_tracing, init_tracing_with, try_init_tracing_with};
