//! Command-line front end for the stock market agent
//!
//! # Usage
//!
//! ```bash
//! export ALPHA_VANTAGE_API_KEY="your-key"
//!
//! market-agent describe
//! market-agent movers --limit 5
//! market-agent details aapl --overview
//! market-agent call get_stock_details --args '{"symbol": "MSFT"}'
//! ```
//!
//! Tool failures are printed and exit with status 0; only configuration and
//! argument errors make the process fail.

use agent_tools::ToolOutput;
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use market_agent::tools::{market_movers, stock_details};
use market_agent::{MarketAgent, MarketConfig};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "market-agent")]
#[command(about = "Stock market movers and stock details from Alpha Vantage", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the agent descriptor (name, model, instruction, tools) as JSON
    Describe,

    /// Show today's top gainers, top losers and most active stocks
    Movers {
        /// Maximum entries per list
        #[arg(short, long)]
        limit: Option<u64>,

        /// Print the full tool output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the latest quote for a ticker symbol
    Details {
        /// Ticker symbol, e.g. AAPL
        symbol: String,

        /// Also fetch the company profile
        #[arg(short, long)]
        overview: bool,

        /// Print the full tool output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Invoke any registered tool with JSON arguments
    Call {
        /// Tool name
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agent_utils::load_dotenv();

    let app_config = agent_utils::Config::from_env().with_app_name("market-agent");
    agent_utils::init_tracing_with(&app_config);

    let args = Args::parse();

    let config = MarketConfig::from_env().context("Failed to load market agent configuration")?;
    let agent = MarketAgent::new(Arc::new(config)).context("Failed to initialize market agent")?;

    match args.command {
        Command::Describe => {
            println!("{}", serde_json::to_string_pretty(agent.descriptor())?);
        }
        Command::Movers { limit, json } => {
            let params = match limit {
                Some(limit) => json!({ "limit": limit }),
                None => json!({}),
            };
            let output = agent.invoke(market_movers::NAME, params).await;
            print_output(&output, json)?;
        }
        Command::Details {
            symbol,
            overview,
            json,
        } => {
            let params = json!({ "symbol": symbol, "include_overview": overview });
            let output = agent.invoke(stock_details::NAME, params).await;
            print_output(&output, json)?;
        }
        Command::Call { tool, args } => {
            let params: Value =
                serde_json::from_str(&args).context("--args must be a JSON object")?;
            debug!(tool = %tool, "Invoking tool");
            let output = agent.invoke(&tool, params).await;
            print_output(&output, true)?;
        }
    }

    Ok(())
}

fn print_output(output: &ToolOutput, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(output)?);
    } else if output.is_success() {
        println!("{}", output.text());
    } else {
        eprintln!("{}", output.text());
    }
    Ok(())
}
