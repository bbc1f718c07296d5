//! Agent descriptor and registry dispatch against a stub provider

mod common;

use common::{StubProvider, fixtures};
use market_agent::MarketAgent;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_invoke_by_name() {
    let stub = StubProvider::builder()
        .json("TOP_GAINERS_LOSERS", fixtures::top_movers())
        .json("GLOBAL_QUOTE", fixtures::aapl_quote())
        .spawn()
        .await;
    let agent = MarketAgent::new(Arc::new(stub.config())).unwrap();

    let output = agent.invoke("get_market_movers", json!({ "limit": 2 })).await;
    assert_eq!(
        output.data().unwrap()["top_gainers"].as_array().unwrap().len(),
        2
    );

    let output = agent.invoke("get_stock_details", json!({ "symbol": "aapl" })).await;
    assert_eq!(output.data().unwrap()["symbol"], "AAPL");

    assert_eq!(stub.request_count(), 2);
}

#[tokio::test]
async fn test_no_caching_between_calls() {
    let stub = StubProvider::builder()
        .json("TOP_GAINERS_LOSERS", fixtures::top_movers())
        .spawn()
        .await;
    let agent = MarketAgent::new(Arc::new(stub.config())).unwrap();

    let first = agent.invoke("get_market_movers", json!(null)).await;
    let second = agent.invoke("get_market_movers", json!(null)).await;

    assert_eq!(first, second);
    assert_eq!(stub.request_count(), 2);
}

#[tokio::test]
async fn test_output_wire_format() {
    let stub = StubProvider::builder()
        .json("GLOBAL_QUOTE:ZZZZ", fixtures::empty_quote())
        .spawn()
        .await;
    let agent = MarketAgent::new(Arc::new(stub.config())).unwrap();

    let output = agent.invoke("get_stock_details", json!({ "symbol": "ZZZZ" })).await;
    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!({ "status": "error", "error_message": "No data found for symbol ZZZZ" })
    );
}

#[tokio::test]
async fn test_unknown_tool_makes_no_request() {
    let stub = StubProvider::builder().spawn().await;
    let agent = MarketAgent::new(Arc::new(stub.config())).unwrap();

    let output = agent.invoke("get_stock_news", json!({ "ticker": "AAPL" })).await;
    assert_eq!(output.error_message(), Some("Unknown tool: get_stock_news"));
    assert_eq!(stub.request_count(), 0);
}
