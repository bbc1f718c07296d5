//! Provider payloads shaped like real Alpha Vantage responses

use serde_json::{Value, json};

fn mover(ticker: &str, price: &str, change_amount: &str, change_percentage: &str, volume: &str) -> Value {
    json!({
        "ticker": ticker,
        "price": price,
        "change_amount": change_amount,
        "change_percentage": change_percentage,
        "volume": volume,
    })
}

/// `TOP_GAINERS_LOSERS` with lists deliberately out of order
pub fn top_movers() -> Value {
    json!({
        "metadata": "Top gainers, losers, and most actively traded US tickers",
        "last_updated": "2024-05-10 16:15:59 US/Eastern",
        "top_gainers": [
            mover("GNRC", "3.21", "0.61", "23.4615%", "1200300"),
            mover("ABCW", "0.0432", "0.0252", "140.0%", "46228711"),
            mover("MULN", "1.05", "0.45", "75.0%", "98765432"),
            mover("SOUN", "5.40", "1.10", "25.5814%", "30111222"),
            mover("ZAPP", "0.88", "0.23", "35.3846%", "5100000"),
        ],
        "top_losers": [
            mover("LOSE", "2.10", "-0.90", "-30.0%", "800000"),
            mover("DOWN", "0.15", "-0.35", "-70.0%", "12000000"),
            mover("SINK", "4.00", "-2.00", "-33.3333%", "450000"),
            mover("DROP", "11.00", "-5.50", "-33.3333%", "100"),
        ],
        "most_actively_traded": [
            mover("NVDA", "898.78", "11.89", "1.3406%", "40000000"),
            mover("TSLA", "171.05", "-2.94", "-1.6897%", "65000000"),
            mover("SQQQ", "9.98", "-0.08", "-0.7952%", "71000000"),
        ],
    })
}

/// `GLOBAL_QUOTE` for AAPL
pub fn aapl_quote() -> Value {
    json!({
        "Global Quote": {
            "01. symbol": "AAPL",
            "02. open": "148.0000",
            "03. high": "151.2000",
            "04. low": "147.5000",
            "05. price": "150.0000",
            "06. volume": "52000000",
            "07. latest trading day": "2024-05-10",
            "08. previous close": "149.0000",
            "09. change": "1.0000",
            "10. change percent": "0.6711%"
        }
    })
}

/// `OVERVIEW` for AAPL, trimmed to the fields the tools read
pub fn aapl_overview() -> Value {
    json!({
        "Symbol": "AAPL",
        "AssetType": "Common Stock",
        "Name": "Apple Inc",
        "Description": "Apple Inc. designs, manufactures and markets smartphones.",
        "Exchange": "NASDAQ",
        "Currency": "USD",
        "Sector": "TECHNOLOGY",
        "Industry": "ELECTRONIC COMPUTERS",
        "MarketCapitalization": "2905000000000",
        "PERatio": "29.5",
        "DividendYield": "0.0044",
        "EPS": "6.43",
        "52WeekHigh": "199.62",
        "52WeekLow": "164.08"
    })
}

/// `GLOBAL_QUOTE` answer for a symbol the provider does not know
pub fn empty_quote() -> Value {
    json!({ "Global Quote": {} })
}

/// Daily quota message returned with status 200
pub fn rate_limit_note() -> Value {
    json!({
        "Information": "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day."
    })
}
