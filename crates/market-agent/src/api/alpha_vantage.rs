//! Alpha Vantage API client
//!
//! Three endpoints are used:
//! - `TOP_GAINERS_LOSERS` for the market movers snapshot
//! - `GLOBAL_QUOTE` for the latest quote of one symbol
//! - `OVERVIEW` for the company profile of one symbol
//!
//! Note: the free tier is limited to a small number of calls per day. Quota
//! messages are reported as [`MarketError::RateLimited`], never retried.

use crate::config::MarketConfig;
use crate::error::{MarketError, Result};
use crate::models::{CompanyOverview, MarketMovers, MoverQuote, StockDetail};
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Alpha Vantage API client
///
/// Holds no state besides the HTTP connection pool; every method issues
/// exactly one request.
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    base_url: Url,
    timeout: Duration,
}

// ============================================================================
// Response structures for Alpha Vantage API
// ============================================================================

/// TOP_GAINERS_LOSERS response
#[derive(Debug, Deserialize)]
struct TopMoversResponse {
    last_updated: Option<String>,
    top_gainers: Option<Vec<RawMover>>,
    top_losers: Option<Vec<RawMover>>,
    most_actively_traded: Option<Vec<RawMover>>,
}

#[derive(Debug, Deserialize)]
struct RawMover {
    ticker: String,
    price: String,
    change_amount: String,
    change_percentage: String,
    volume: String,
}

/// GLOBAL_QUOTE payload (inside the `"Global Quote"` object)
#[derive(Debug, Deserialize)]
struct RawGlobalQuote {
    #[serde(rename = "01. symbol")]
    symbol: Option<String>,
    #[serde(rename = "02. open")]
    open: Option<String>,
    #[serde(rename = "03. high")]
    high: Option<String>,
    #[serde(rename = "04. low")]
    low: Option<String>,
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "06. volume")]
    volume: Option<String>,
    #[serde(rename = "07. latest trading day")]
    latest_trading_day: Option<String>,
    #[serde(rename = "08. previous close")]
    previous_close: Option<String>,
    #[serde(rename = "09. change")]
    change: Option<String>,
    #[serde(rename = "10. change percent")]
    change_percent: Option<String>,
}

/// OVERVIEW response
// Note: API provides many more fields (CIK, Beta, margins, ...)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawOverview {
    symbol: Option<String>,
    name: Option<String>,
    description: Option<String>,
    exchange: Option<String>,
    currency: Option<String>,
    sector: Option<String>,
    industry: Option<String>,
    market_capitalization: Option<String>,
    #[serde(rename = "PERatio")]
    pe_ratio: Option<String>,
    dividend_yield: Option<String>,
    #[serde(rename = "EPS")]
    eps: Option<String>,
    #[serde(rename = "52WeekHigh")]
    week_52_high: Option<String>,
    #[serde(rename = "52WeekLow")]
    week_52_low: Option<String>,
}

impl RawMover {
    fn into_quote(self) -> Result<MoverQuote> {
        Ok(MoverQuote {
            price: parse_decimal("price", &self.price)?,
            change_amount: parse_decimal("change_amount", &self.change_amount)?,
            change_percent: parse_decimal("change_percentage", &self.change_percentage)?,
            volume: parse_volume(&self.volume)?,
            symbol: self.ticker.trim().to_ascii_uppercase(),
        })
    }
}

impl RawGlobalQuote {
    fn is_empty(&self) -> bool {
        self.symbol.is_none() && self.price.is_none()
    }

    fn into_detail(self, symbol: &str) -> Result<StockDetail> {
        if let Some(reported) = &self.symbol {
            if !reported.eq_ignore_ascii_case(symbol) {
                warn!(requested = symbol, reported = %reported, "Quote symbol differs from request");
            }
        }

        let price = self
            .price
            .as_deref()
            .ok_or_else(|| MarketError::MalformedResponse("quote has no price".to_string()))?;

        Ok(StockDetail {
            symbol: symbol.to_string(),
            name: None,
            price: parse_decimal("price", price)?,
            open: parse_optional_decimal("open", self.open.as_deref())?,
            day_high: parse_optional_decimal("high", self.high.as_deref())?,
            day_low: parse_optional_decimal("low", self.low.as_deref())?,
            volume: self.volume.as_deref().map(parse_volume).transpose()?.unwrap_or(0),
            latest_trading_day: self
                .latest_trading_day
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok()),
            previous_close: parse_optional_decimal("previous close", self.previous_close.as_deref())?,
            change: parse_optional_decimal("change", self.change.as_deref())?,
            change_percent: parse_optional_decimal("change percent", self.change_percent.as_deref())?,
            overview: None,
        })
    }
}

impl RawOverview {
    fn into_overview(self) -> CompanyOverview {
        CompanyOverview {
            name: present(self.name),
            description: present(self.description),
            exchange: present(self.exchange),
            currency: present(self.currency),
            sector: present(self.sector),
            industry: present(self.industry),
            market_capitalization: lenient_decimal(self.market_capitalization),
            pe_ratio: lenient_decimal(self.pe_ratio),
            dividend_yield: lenient_decimal(self.dividend_yield),
            eps: lenient_decimal(self.eps),
            week_52_high: lenient_decimal(self.week_52_high),
            week_52_low: lenient_decimal(self.week_52_low),
        }
    }
}

impl AlphaVantageClient {
    /// Create a client from the shared configuration
    pub fn new(config: &MarketConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| MarketError::Config(format!("invalid base_url '{}': {e}", config.base_url)))?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| MarketError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.alpha_vantage_api_key.clone(),
            base_url,
            timeout: config.request_timeout,
        })
    }

    /// Get the day's top gainers, top losers and most actively traded tickers
    ///
    /// Lists are returned in provider order and untruncated; see
    /// [`MarketMovers::ranked`].
    pub async fn top_gainers_losers(&self) -> Result<MarketMovers> {
        let data = self.fetch("TOP_GAINERS_LOSERS", &[]).await?;

        for field in ["top_gainers", "top_losers", "most_actively_traded"] {
            if !data.get(field).is_some_and(Value::is_array) {
                return Err(missing_data(&data, field));
            }
        }

        let response: TopMoversResponse = serde_json::from_value(data)
            .map_err(|e| MarketError::MalformedResponse(e.to_string()))?;

        Ok(MarketMovers {
            top_gainers: convert_movers(response.top_gainers)?,
            top_losers: convert_movers(response.top_losers)?,
            most_actively_traded: convert_movers(response.most_actively_traded)?,
            last_updated: response.last_updated,
        })
    }

    /// Get the latest quote for an already normalized symbol
    pub async fn global_quote(&self, symbol: &str) -> Result<StockDetail> {
        let data = self.fetch("GLOBAL_QUOTE", &[("symbol", symbol)]).await?;

        let Some(quote) = data.get("Global Quote") else {
            return Err(missing_data(&data, "Global Quote"));
        };

        let quote: RawGlobalQuote = serde_json::from_value(quote.clone())
            .map_err(|e| MarketError::MalformedResponse(e.to_string()))?;

        // Unknown symbols come back as `{"Global Quote": {}}`
        if quote.is_empty() {
            return Err(MarketError::NotFound {
                symbol: symbol.to_string(),
            });
        }

        quote.into_detail(symbol)
    }

    /// Get the company profile for an already normalized symbol
    ///
    /// Returns `None` when the provider has no profile (ETFs, unknown symbols).
    pub async fn company_overview(&self, symbol: &str) -> Result<Option<CompanyOverview>> {
        let data = self.fetch("OVERVIEW", &[("symbol", symbol)]).await?;

        if data.get("Symbol").is_none() {
            debug!(symbol, "No company overview available");
            return Ok(None);
        }

        let overview: RawOverview = serde_json::from_value(data)
            .map_err(|e| MarketError::MalformedResponse(e.to_string()))?;
        debug!(symbol, reported = ?overview.symbol, "Company overview received");

        Ok(Some(overview.into_overview()))
    }

    /// Make a request to the Alpha Vantage API and check for API-level errors
    async fn fetch(&self, function: &str, params: &[(&str, &str)]) -> Result<Value> {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("function", function);
            for (key, value) in params {
                query.append_pair(key, value);
            }
            query.append_pair("apikey", &self.api_key);
        }

        debug!(
            function,
            url = %url.as_str().replace(&self.api_key, "***"),
            "Alpha Vantage request"
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MarketError::from_transport(e, self.timeout))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketError::RateLimited(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(MarketError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketError::from_transport(e, self.timeout))?;

        let data: Value = serde_json::from_str(&body).map_err(|e| {
            MarketError::MalformedResponse(format!("response is not valid JSON: {e}"))
        })?;

        check_api_error(&data)?;
        Ok(data)
    }
}

/// Check for API-level errors in an otherwise successful response
fn check_api_error(data: &Value) -> Result<()> {
    if !data.is_object() {
        return Err(MarketError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    }

    if let Some(msg) = data.get("Error Message").and_then(Value::as_str) {
        return Err(MarketError::Provider(msg.to_string()));
    }

    // "Note" and "Information" carry quota messages, among other things
    for key in ["Note", "Information"] {
        if let Some(msg) = data.get(key).and_then(Value::as_str) {
            if is_rate_limit_message(msg) {
                return Err(MarketError::RateLimited(msg.to_string()));
            }
            warn!("Alpha Vantage {}: {}", key.to_lowercase(), msg);
        }
    }

    Ok(())
}

fn is_rate_limit_message(msg: &str) -> bool {
    let msg = msg.to_lowercase();
    msg.contains("api call frequency")
        || msg.contains("rate limit")
        || msg.contains("requests per day")
}

/// Error for a response lacking `field`, preferring the provider's own note
fn missing_data(data: &Value, field: &str) -> MarketError {
    match data
        .get("Information")
        .or_else(|| data.get("Note"))
        .and_then(Value::as_str)
    {
        Some(msg) => MarketError::Provider(msg.to_string()),
        None => MarketError::MalformedResponse(format!("missing `{field}` in response")),
    }
}

fn convert_movers(raw: Option<Vec<RawMover>>) -> Result<Vec<MoverQuote>> {
    raw.unwrap_or_default()
        .into_iter()
        .map(RawMover::into_quote)
        .collect()
}

/// Parse a provider number such as `"$1,234.50"`, `"+12.5%"` or `"-0.37"`
fn parse_decimal(field: &str, raw: &str) -> Result<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | '%' | ',' | '+'))
        .collect();

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| MarketError::MalformedResponse(format!("{field} is not a number: {raw:?}")))
}

fn parse_optional_decimal(field: &str, raw: Option<&str>) -> Result<Option<Decimal>> {
    match raw {
        Some(value) if !is_placeholder(value) => parse_decimal(field, value).map(Some),
        _ => Ok(None),
    }
}

fn parse_volume(raw: &str) -> Result<u64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse()
        .map_err(|_| MarketError::MalformedResponse(format!("volume is not an integer: {raw:?}")))
}

/// The overview endpoint uses `"None"` or `"-"` for missing values
fn is_placeholder(value: &str) -> bool {
    matches!(value.trim(), "" | "None" | "-")
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_placeholder(v))
}

fn lenient_decimal(value: Option<String>) -> Option<Decimal> {
    present(value).and_then(|v| parse_decimal("overview", &v).ok())
}
