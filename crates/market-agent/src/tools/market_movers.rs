//! Tool for the day's top gainers, top losers and most active stocks

use agent_core::Result as AgentResult;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

use super::{parse_params, with_report};
use crate::api::AlphaVantageClient;
use crate::config::MarketConfig;
use crate::error::{MarketError, Result};
use crate::models::MarketMovers;
use crate::report::movers_report;

/// Tool name advertised to the front end
pub const NAME: &str = "get_market_movers";

/// Tool returning ranked market movers lists
pub struct MarketMoversTool {
    client: AlphaVantageClient,
    config: Arc<MarketConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct MarketMoversParams {
    #[serde(default)]
    limit: Option<u64>,
}

impl MarketMoversTool {
    /// Create a new market movers tool
    pub fn new(client: AlphaVantageClient, config: Arc<MarketConfig>) -> Self {
        Self { client, config }
    }

    /// Entries per list for a requested limit, capped at the configured maximum
    pub fn effective_limit(&self, limit: Option<u64>) -> Result<usize> {
        let max = self.config.max_movers;
        match limit {
            None => Ok(max),
            Some(0) => Err(MarketError::InvalidArguments(
                "limit must be at least 1".to_string(),
            )),
            Some(n) => Ok(usize::try_from(n).map_or(max, |n| n.min(max))),
        }
    }

    /// Fetch the movers snapshot, ranked and truncated
    ///
    /// Issues exactly one request per call.
    pub async fn fetch(&self, limit: Option<u64>) -> Result<MarketMovers> {
        let limit = self.effective_limit(limit)?;
        let movers = self.client.top_gainers_losers().await?;

        debug!(
            gainers = movers.top_gainers.len(),
            losers = movers.top_losers.len(),
            active = movers.most_actively_traded.len(),
            limit,
            "Market movers received"
        );

        Ok(movers.ranked(limit))
    }
}

#[async_trait]
impl Tool for MarketMoversTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: MarketMoversParams = parse_params(params)?;

        let result = async {
            let movers = self.fetch(params.limit).await?;
            let report = movers_report(&movers)?;
            with_report(&movers, report)
        }
        .await;

        result.map_err(|e| match e {
            MarketError::InvalidArguments(_) => e.into(),
            other => agent_core::Error::ToolFailed(format!(
                "Failed to retrieve market movers: {other}"
            )),
        })
    }

    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Get today's top gainers, top losers and most actively traded US stocks. \
         Each list holds the ticker symbol, price, change amount, change percentage \
         and volume, plus the time the data was last updated."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "limit": schema::integer(
                    &format!(
                        "Maximum entries per list (at most {})",
                        self.config.max_movers
                    ),
                    1,
                ),
            }),
            &[],
        )
    }
}
