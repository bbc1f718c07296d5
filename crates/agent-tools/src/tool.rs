//! Tool trait definition

use agent_core::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Instant;
use tracing::{info, warn};

use crate::{ToolDefinition, ToolOutput};

/// Trait for tools that agents can execute
///
/// Tools are functions that LLM agents can call to interact with the world.
/// Each tool must provide a name, description, and JSON schema for its input.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    ///
    /// # Returns
    ///
    /// Tool output as JSON value
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry and match the name in ToolDefinition
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// This description helps the LLM understand when to use this tool
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    ///
    /// Describes the parameters this tool expects. The LLM uses this schema
    /// to generate valid tool calls.
    fn input_schema(&self) -> Value;

    /// Build the definition advertised to the front end
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.input_schema())
    }

    /// Run the tool and fold any failure into a user-facing message
    ///
    /// This is the entry point a front end should use: it never returns an
    /// error, only [`ToolOutput::Success`] or [`ToolOutput::Error`].
    async fn call(&self, params: Value) -> ToolOutput {
        let started = Instant::now();
        match self.execute(params).await {
            Ok(data) => {
                info!(
                    tool = self.name(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Tool call succeeded"
                );
                ToolOutput::success(data)
            }
            Err(e) => {
                warn!(
                    tool = self.name(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "Tool call failed"
                );
                ToolOutput::error(e.to_string())
            }
        }
    }
}
