//! Agent descriptor and tool registry
//!
//! The surrounding conversational framework (dialogue, model invocation) is
//! not part of this crate. [`MarketAgent`] hands it a serializable
//! [`AgentDescriptor`] and a [`ToolRegistry`] to invoke tools by name.

use agent_tools::{ToolDefinition, ToolOutput, ToolRegistry};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::api::AlphaVantageClient;
use crate::config::MarketConfig;
use crate::error::Result;
use crate::prompts::{AGENT_DESCRIPTION, instruction};
use crate::tools::{MarketMoversTool, StockDetailsTool, market_movers, stock_details};

/// Everything a front end needs to present the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDescriptor {
    pub name: String,
    pub model: String,
    pub description: String,
    pub instruction: String,
    pub tools: Vec<ToolDefinition>,
}

/// Stock market agent exposing the movers and details tools
pub struct MarketAgent {
    descriptor: AgentDescriptor,
    registry: ToolRegistry,
}

impl MarketAgent {
    /// Create the agent and register its tools
    pub fn new(config: Arc<MarketConfig>) -> Result<Self> {
        config.validate()?;

        let client = AlphaVantageClient::new(&config)?;

        let registry = ToolRegistry::new();
        registry.register(Arc::new(MarketMoversTool::new(
            client.clone(),
            Arc::clone(&config),
        )));
        registry.register(Arc::new(StockDetailsTool::new(client)));

        let descriptor = AgentDescriptor {
            name: config.agent_name.clone(),
            model: config.model.clone(),
            description: AGENT_DESCRIPTION.to_string(),
            instruction: instruction(market_movers::NAME, stock_details::NAME, config.max_movers)?,
            tools: registry.definitions(),
        };

        info!(
            agent = %descriptor.name,
            model = %descriptor.model,
            tools = descriptor.tools.len(),
            "Market agent ready"
        );

        Ok(Self {
            descriptor,
            registry,
        })
    }

    /// Static declaration of the agent and its tools
    pub fn descriptor(&self) -> &AgentDescriptor {
        &self.descriptor
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Invoke a tool by name
    pub async fn invoke(&self, tool: &str, params: Value) -> ToolOutput {
        self.registry.invoke(tool, params).await
    }
}
