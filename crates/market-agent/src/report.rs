//! Plain-text reports for chat front ends
//!
//! Both tools return a `report` string next to their structured data so a
//! front end without table rendering can show the result as is. Numbers are
//! formatted here; the MiniJinja templates only handle layout.

use crate::error::Result;
use crate::models::{CompanyOverview, MarketMovers, MoverQuote, StockDetail};
use minijinja::Environment;
use rust_decimal::Decimal;
use serde::Serialize;

const MOVERS_TEMPLATE: &str = r"{% for section in sections %}
{{ section.title }}:
{% for row in section.rows %}
{{ loop.index }}. {{ row.symbol }}: {{ row.change_percent }}%, ${{ row.price }} (vol {{ row.volume }})
{% else %}
  none reported
{% endfor %}

{% endfor %}
{% if last_updated %}
Last updated: {{ last_updated }}
{% endif %}
";

const DETAILS_TEMPLATE: &str = r"Stock Details for {{ header }}:
Price: ${{ price }}
{% if change %}
Change: {{ change }}
{% endif %}
{% if day_range %}
Day Range: {{ day_range }}
{% endif %}
Volume: {{ volume }}
{% if latest_trading_day %}
Latest Trading Day: {{ latest_trading_day }}
{% endif %}
{% if overview %}
Sector: {{ overview.sector }}
Industry: {{ overview.industry }}
Market Cap: {{ overview.market_cap }}
P/E Ratio: {{ overview.pe_ratio }}
Dividend Yield: {{ overview.dividend_yield }}
52-week High: {{ overview.week_52_high }}
52-week Low: {{ overview.week_52_low }}
{% endif %}
";

const NOT_AVAILABLE: &str = "N/A";

#[derive(Serialize)]
struct MoversView<'a> {
    sections: [SectionView<'a>; 3],
    last_updated: Option<&'a str>,
}

#[derive(Serialize)]
struct SectionView<'a> {
    title: &'static str,
    rows: Vec<MoverRow<'a>>,
}

#[derive(Serialize)]
struct MoverRow<'a> {
    symbol: &'a str,
    change_percent: String,
    price: String,
    volume: String,
}

#[derive(Serialize)]
struct DetailView {
    header: String,
    price: String,
    change: Option<String>,
    day_range: Option<String>,
    volume: String,
    latest_trading_day: Option<String>,
    overview: Option<OverviewView>,
}

#[derive(Serialize)]
struct OverviewView {
    sector: String,
    industry: String,
    market_cap: String,
    pe_ratio: String,
    dividend_yield: String,
    week_52_high: String,
    week_52_low: String,
}

fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template("movers", MOVERS_TEMPLATE)?;
    env.add_template("details", DETAILS_TEMPLATE)?;
    Ok(env)
}

/// Render the numbered gainers, losers and most active lists
pub fn movers_report(movers: &MarketMovers) -> Result<String> {
    let view = MoversView {
        sections: [
            section("Top Gainers", &movers.top_gainers),
            section("Top Losers", &movers.top_losers),
            section("Most Actively Traded", &movers.most_actively_traded),
        ],
        last_updated: movers.last_updated.as_deref(),
    };

    let env = environment()?;
    let text = env.get_template("movers")?.render(&view)?;
    Ok(text.trim_end().to_string())
}

/// Render the quote (and profile, when attached) of one stock
pub fn details_report(detail: &StockDetail) -> Result<String> {
    let header = match &detail.name {
        Some(name) => format!("{} ({name})", detail.symbol),
        None => detail.symbol.clone(),
    };

    let change = detail.change.map(|change| match detail.change_percent {
        Some(pct) => format!("{} ({}%)", signed(change, 2), signed(pct, 2)),
        None => signed(change, 2),
    });

    let day_range = match (detail.day_low, detail.day_high) {
        (Some(low), Some(high)) => Some(format!("${} - ${}", money(low), money(high))),
        _ => None,
    };

    let view = DetailView {
        header,
        price: money(detail.price),
        change,
        day_range,
        volume: thousands(detail.volume),
        latest_trading_day: detail.latest_trading_day.map(|d| d.to_string()),
        overview: detail.overview.as_ref().map(overview_view),
    };

    let env = environment()?;
    let text = env.get_template("details")?.render(&view)?;
    Ok(text.trim_end().to_string())
}

fn section<'a>(title: &'static str, quotes: &'a [MoverQuote]) -> SectionView<'a> {
    SectionView {
        title,
        rows: quotes
            .iter()
            .map(|q| MoverRow {
                symbol: &q.symbol,
                change_percent: signed(q.change_percent, 1),
                price: money(q.price),
                volume: thousands(q.volume),
            })
            .collect(),
    }
}

fn overview_view(overview: &CompanyOverview) -> OverviewView {
    let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_string());

    OverviewView {
        sector: overview.sector.clone().unwrap_or_else(|| "Unknown".to_string()),
        industry: overview.industry.clone().unwrap_or_else(|| "Unknown".to_string()),
        market_cap: or_na(overview.market_capitalization.map(billions)),
        pe_ratio: or_na(overview.pe_ratio.map(|v| scaled(v, 2))),
        dividend_yield: or_na(overview.dividend_yield.and_then(percent)),
        week_52_high: or_na(overview.week_52_high.map(|v| format!("${}", money(v)))),
        week_52_low: or_na(overview.week_52_low.map(|v| format!("${}", money(v)))),
    }
}

/// Drop trailing zeros but keep at least `min_scale` decimal places
fn scaled(value: Decimal, min_scale: u32) -> String {
    let mut value = value.normalize();
    if value.scale() < min_scale {
        value.rescale(min_scale);
    }
    value.to_string()
}

/// Price with cents, keeping sub-cent precision for penny stocks
fn money(value: Decimal) -> String {
    scaled(value, 2)
}

fn signed(value: Decimal, min_scale: u32) -> String {
    if value.is_sign_negative() && !value.is_zero() {
        scaled(value, min_scale)
    } else {
        format!("+{}", scaled(value.abs(), min_scale))
    }
}

/// Fraction as a percentage, `None` when the provider value is out of range
fn percent(fraction: Decimal) -> Option<String> {
    fraction
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|pct| format!("{}%", scaled(pct, 2)))
}

fn billions(value: Decimal) -> String {
    let mut billions = (value / Decimal::from(1_000_000_000u64)).round_dp(2);
    billions.rescale(2);
    format!("${billions} billion")
}

fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn quote(symbol: &str, change_percent: Decimal, price: Decimal, volume: u64) -> MoverQuote {
        MoverQuote {
            symbol: symbol.to_string(),
            price,
            change_amount: dec!(0),
            change_percent,
            volume,
        }
    }

    fn detail() -> StockDetail {
        StockDetail {
            symbol: "AAPL".to_string(),
            name: None,
            price: dec!(150.0000),
            open: Some(dec!(148.00)),
            day_high: Some(dec!(151.2)),
            day_low: Some(dec!(147.5)),
            volume: 52_000_000,
            latest_trading_day: NaiveDate::from_ymd_opt(2024, 5, 10),
            previous_close: Some(dec!(149.00)),
            change: Some(dec!(1.0000)),
            change_percent: Some(dec!(0.6711)),
            overview: None,
        }
    }

    #[test]
    fn test_number_helpers() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_234_567), "1,234,567");
        assert_eq!(money(dec!(150.0000)), "150.00");
        assert_eq!(money(dec!(0.0432)), "0.0432");
        assert_eq!(signed(dec!(12.5), 1), "+12.5");
        assert_eq!(signed(dec!(-3.10), 2), "-3.10");
        assert_eq!(signed(dec!(0), 2), "+0.00");
        assert_eq!(billions(dec!(2905000000000)), "$2905.00 billion");
        assert_eq!(percent(dec!(0.0044)).as_deref(), Some("0.44%"));
    }

    #[test]
    fn test_extreme_overview_values_do_not_panic() {
        let overview = CompanyOverview {
            market_capitalization: Some(Decimal::MAX),
            pe_ratio: Some(Decimal::MAX),
            dividend_yield: Some(Decimal::from_scientific("1e27").unwrap()),
            ..Default::default()
        };

        assert!(percent(Decimal::MAX).is_none());

        let report = details_report(&detail().with_overview(overview)).unwrap();
        assert!(report.contains("Dividend Yield: N/A"));
        assert!(report.contains("Market Cap: $"));
    }

    #[test]
    fn test_movers_report() {
        let movers = MarketMovers {
            top_gainers: vec![quote("ABCW", dec!(140.0), dec!(0.0432), 46_228_711)],
            top_losers: vec![quote("XYZ", dec!(-45.25), dec!(3.21), 1_000)],
            most_actively_traded: vec![],
            last_updated: Some("2024-05-10 16:15:59 US/Eastern".to_string()),
        };

        let report = movers_report(&movers).unwrap();
        assert!(report.starts_with("Top Gainers:\n1. ABCW: +140.0%, $0.0432 (vol 46,228,711)"));
        assert!(report.contains("Top Losers:\n1. XYZ: -45.25%, $3.21 (vol 1,000)"));
        assert!(report.contains("Most Actively Traded:\n  none reported"));
        assert!(report.ends_with("Last updated: 2024-05-10 16:15:59 US/Eastern"));
    }

    #[test]
    fn test_details_report_quote_only() {
        let report = details_report(&detail()).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Stock Details for AAPL:",
                "Price: $150.00",
                "Change: +1.00 (+0.6711%)",
                "Day Range: $147.50 - $151.20",
                "Volume: 52,000,000",
                "Latest Trading Day: 2024-05-10",
            ]
        );
    }

    #[test]
    fn test_details_report_with_overview() {
        let overview = CompanyOverview {
            name: Some("Apple Inc".to_string()),
            sector: Some("TECHNOLOGY".to_string()),
            market_capitalization: Some(dec!(2905000000000)),
            pe_ratio: Some(dec!(29.5)),
            dividend_yield: Some(dec!(0.0044)),
            week_52_high: Some(dec!(199.62)),
            ..Default::default()
        };

        let report = details_report(&detail().with_overview(overview)).unwrap();
        assert!(report.starts_with("Stock Details for AAPL (Apple Inc):"));
        assert!(report.contains("Sector: TECHNOLOGY"));
        assert!(report.contains("Industry: Unknown"));
        assert!(report.contains("Market Cap: $2905.00 billion"));
        assert!(report.contains("P/E Ratio: 29.50"));
        assert!(report.contains("Dividend Yield: 0.44%"));
        assert!(report.contains("52-week High: $199.62"));
        assert!(report.ends_with("52-week Low: N/A"));
    }
}
