//! Market data returned by the tools
//!
//! Everything here is built fresh from a provider response and dropped after
//! the tool call; nothing is cached or mutated between calls.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of a market movers list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoverQuote {
    pub symbol: String,
    pub price: Decimal,
    pub change_amount: Decimal,
    /// Percent change, e.g. `12.5` for +12.5%
    pub change_percent: Decimal,
    pub volume: u64,
}

/// Snapshot of the day's biggest movers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketMovers {
    pub top_gainers: Vec<MoverQuote>,
    pub top_losers: Vec<MoverQuote>,
    pub most_actively_traded: Vec<MoverQuote>,
    /// Provider timestamp, e.g. `2024-05-10 16:15:59 US/Eastern`
    pub last_updated: Option<String>,
}

impl MarketMovers {
    /// Order each list and keep at most `limit` entries
    ///
    /// Gainers by percent change descending, losers ascending (most negative
    /// first), most active by volume descending. Sorts are stable so the
    /// provider's order breaks ties.
    pub fn ranked(mut self, limit: usize) -> Self {
        self.top_gainers
            .sort_by(|a, b| b.change_percent.cmp(&a.change_percent));
        self.top_losers
            .sort_by(|a, b| a.change_percent.cmp(&b.change_percent));
        self.most_actively_traded
            .sort_by(|a, b| b.volume.cmp(&a.volume));

        self.top_gainers.truncate(limit);
        self.top_losers.truncate(limit);
        self.most_actively_traded.truncate(limit);
        self
    }
}

/// Quote and optional company profile for one symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDetail {
    pub symbol: String,
    pub name: Option<String>,
    pub price: Decimal,
    pub open: Option<Decimal>,
    pub day_high: Option<Decimal>,
    pub day_low: Option<Decimal>,
    pub volume: u64,
    pub latest_trading_day: Option<NaiveDate>,
    pub previous_close: Option<Decimal>,
    pub change: Option<Decimal>,
    pub change_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<CompanyOverview>,
}

impl StockDetail {
    /// Attach a company profile, taking the company name from it
    pub fn with_overview(mut self, overview: CompanyOverview) -> Self {
        if self.name.is_none() {
            self.name.clone_from(&overview.name);
        }
        self.overview = Some(overview);
        self
    }
}

/// Descriptive company data from the provider's overview endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyOverview {
    pub name: Option<String>,
    pub description: Option<String>,
    pub exchange: Option<String>,
    pub currency: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub market_capitalization: Option<Decimal>,
    pub pe_ratio: Option<Decimal>,
    pub dividend_yield: Option<Decimal>,
    pub eps: Option<Decimal>,
    pub week_52_high: Option<Decimal>,
    pub week_52_low: Option<Decimal>,
}
