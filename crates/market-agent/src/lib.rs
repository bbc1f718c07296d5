//! Stock market tools for a conversational agent
//!
//! This crate answers two kinds of questions using the Alpha Vantage API:
//!
//! - Which stocks moved the most today (`get_market_movers`)
//! - What is the latest quote for a ticker (`get_stock_details`)
//!
//! Every tool call is one stateless request/response cycle that ends in
//! either data or a message for the user. Configuration is read once and
//! passed in; nothing is cached between calls.
//!
//! # Example
//!
//! ```rust,no_run
//! use market_agent::{MarketAgent, MarketConfig};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # async fn run() -> market_agent::Result<()> {
//! let config = Arc::new(MarketConfig::from_env()?);
//! let agent = MarketAgent::new(config)?;
//!
//! let output = agent
//!     .invoke("get_stock_details", json!({ "symbol": "aapl" }))
//!     .await;
//! println!("{}", output.text());
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod prompts;
pub mod report;
pub mod symbol;
pub mod tools;

pub use agent::{AgentDescriptor, MarketAgent};
pub use config::MarketConfig;
pub use error::{MarketError, Result};
pub use models::{CompanyOverview, MarketMovers, MoverQuote, StockDetail};
pub use tools::{MarketMoversTool, StockDetailsTool};

pub use agent_tools::ToolOutput;
