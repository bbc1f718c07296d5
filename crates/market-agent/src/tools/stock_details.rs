//! Tool for the latest quote of a single stock

use agent_core::Result as AgentResult;
use agent_tools::{Tool, schema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::{parse_params, with_report};
use crate::api::AlphaVantageClient;
use crate::error::{MarketError, Result};
use crate::models::StockDetail;
use crate::report::details_report;
use crate::symbol::normalize_symbol;

/// Tool name advertised to the front end
pub const NAME: &str = "get_stock_details";

/// Tool returning quote details, optionally enriched with a company profile
pub struct StockDetailsTool {
    client: AlphaVantageClient,
}

#[derive(Debug, Deserialize)]
struct StockDetailsParams {
    symbol: String,
    #[serde(default)]
    include_overview: bool,
}

impl StockDetailsTool {
    /// Create a new stock details tool
    pub fn new(client: AlphaVantageClient) -> Self {
        Self { client }
    }

    /// Fetch details for `symbol`
    ///
    /// One quote request, plus one overview request when `include_overview`
    /// is set.
    pub async fn fetch(&self, symbol: &str, include_overview: bool) -> Result<StockDetail> {
        let symbol = normalize_symbol(symbol)?;

        let detail = match self.client.global_quote(&symbol).await {
            // Alpha Vantage answers unknown symbols on some endpoints this way
            Err(MarketError::Provider(msg)) if msg.contains("Invalid API call") => {
                debug!(symbol = %symbol, message = %msg, "Provider rejected symbol");
                return Err(MarketError::NotFound { symbol });
            }
            result => result?,
        };

        if !include_overview {
            return Ok(detail);
        }

        match self.client.company_overview(&symbol).await? {
            Some(overview) => Ok(detail.with_overview(overview)),
            None => {
                warn!(symbol = %symbol, "Company overview unavailable, returning quote only");
                Ok(detail)
            }
        }
    }
}

/// Map a failure to the message shown to the user
fn failure(symbol: &str, err: MarketError) -> agent_core::Error {
    match err {
        MarketError::InvalidArguments(_) => err.into(),
        MarketError::InvalidSymbol(_) | MarketError::NotFound { .. } => {
            agent_core::Error::ToolFailed(err.to_string())
        }
        other => agent_core::Error::ToolFailed(format!(
            "Failed to retrieve stock details for {symbol}: {other}"
        )),
    }
}

#[async_trait]
impl Tool for StockDetailsTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: StockDetailsParams = parse_params(params)?;
        let display_symbol = params.symbol.trim().to_ascii_uppercase();

        let result = async {
            let detail = self.fetch(&params.symbol, params.include_overview).await?;
            let report = details_report(&detail)?;
            with_report(&detail, report)
        }
        .await;

        result.map_err(|e| failure(&display_symbol, e))
    }

    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Get the latest price, daily change, day range and volume for a stock ticker symbol. \
         Set include_overview to also get the company name, sector, industry, market \
         capitalization, P/E ratio, dividend yield and 52-week range."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "symbol": schema::string("Stock ticker symbol (e.g. 'AAPL', 'MSFT')"),
                "include_overview": schema::boolean(
                    "Also fetch the company profile (one extra request)",
                    false,
                ),
            }),
            &["symbol"],
        )
    }
}
