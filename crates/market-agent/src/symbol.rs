//! Ticker symbol normalization

use crate::error::{MarketError, Result};

/// Longest symbol accepted (covers suffixed listings such as `RDS-A` or `BRK.B`)
const MAX_SYMBOL_LEN: usize = 12;

/// Trim and uppercase a ticker symbol, rejecting anything that cannot be one
///
/// ```
/// use market_agent::symbol::normalize_symbol;
///
/// assert_eq!(normalize_symbol("  aapl ").unwrap(), "AAPL");
/// assert_eq!(normalize_symbol("brk.b").unwrap(), "BRK.B");
/// assert!(normalize_symbol("   ").is_err());
/// ```
pub fn normalize_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_ascii_uppercase();

    if symbol.is_empty() {
        return Err(MarketError::InvalidSymbol(
            "ticker symbol must not be empty".to_string(),
        ));
    }

    if symbol.len() > MAX_SYMBOL_LEN {
        return Err(MarketError::InvalidSymbol(format!(
            "{symbol} is longer than {MAX_SYMBOL_LEN} characters"
        )));
    }

    if !symbol
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(MarketError::InvalidSymbol(format!(
            "{symbol} contains characters not allowed in a ticker symbol"
        )));
    }

    Ok(symbol)
}
