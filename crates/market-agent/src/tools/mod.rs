//! Tools exposed to the conversational front end
//!
//! Each tool performs its provider request(s) on every call. Nothing is
//! cached and the tools hold no mutable state.

pub mod market_movers;
pub mod stock_details;

pub use market_movers::MarketMoversTool;
pub use stock_details::StockDetailsTool;

use crate::error::{MarketError, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Deserialize tool arguments, treating a missing argument object as empty
fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T> {
    let params = match params {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };
    serde_json::from_value(params).map_err(|e| MarketError::InvalidArguments(e.to_string()))
}

/// Serialize a result and attach its text report
fn with_report<T: serde::Serialize>(data: &T, report: String) -> Result<Value> {
    let mut value = serde_json::to_value(data)?;
    if let Value::Object(map) = &mut value {
        map.insert("report".to_string(), Value::String(report));
    }
    Ok(value)
}
