//! Tool definition types handed to the language-model front end

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool definition for an LLM front end
///
/// This describes a tool that the model can use, including its name,
/// description, and input schema in JSON Schema format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (must match the tool in ToolRegistry)
    pub name: String,

    /// Description of what the tool does
    pub description: String,

    /// JSON schema for the tool's input parameters
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Create a new tool definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    /// Names of the properties the schema marks as required
    pub fn required_arguments(&self) -> Vec<&str> {
        self.input_schema["required"]
            .as_array()
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Helper module to build JSON schemas for tools
pub mod schema {
    use serde_json::{Value, json};

    /// Create a JSON schema for an object with properties
    ///
    /// # Example
    ///
    /// ```
    /// use agent_tools::schema;
    /// use serde_json::json;
    ///
    /// let schema = schema::object(
    ///     json!({
    ///         "symbol": schema::string("Ticker symbol"),
    ///         "limit": schema::integer("Maximum results", 1),
    ///     }),
    ///     &["symbol"],
    /// );
    /// assert_eq!(schema["required"][0], "symbol");
    /// ```
    pub fn object(properties: Value, required: &[&str]) -> Value {
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// String property schema
    pub fn string(description: &str) -> Value {
        json!({
            "type": "string",
            "description": description,
        })
    }

    /// Integer property schema with an inclusive lower bound
    pub fn integer(description: &str, minimum: i64) -> Value {
        json!({
            "type": "integer",
            "description": description,
            "minimum": minimum,
        })
    }

    /// Boolean property schema with the value assumed when omitted
    pub fn boolean(description: &str, default: bool) -> Value {
        json!({
            "type": "boolean",
            "description": description,
            "default": default,
        })
    }
}
