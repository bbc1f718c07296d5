//! Result value returned to the conversational front end

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a single tool call
///
/// A front end has no structured error channel, so a tool call always yields
/// one of these two values. Serialized with a `status` tag:
///
/// ```json
/// {"status": "success", "data": { ... }}
/// {"status": "error", "error_message": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolOutput {
    /// The tool produced data
    Success { data: Value },
    /// The tool failed; the message is meant for the end user
    Error { error_message: String },
}

impl ToolOutput {
    /// Wrap a successful payload
    pub fn success(data: Value) -> Self {
        Self::Success { data }
    }

    /// Wrap a failure message
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error_message: message.into(),
        }
    }

    /// Whether the call produced data
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Payload of a successful call
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success { data } => Some(data),
            Self::Error { .. } => None,
        }
    }

    /// Message of a failed call
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error_message } => Some(error_message),
        }
    }

    /// Plain-text rendition for text-only front ends
    ///
    /// Uses the payload's `report` field when present, falling back to the
    /// pretty-printed payload.
    pub fn text(&self) -> String {
        match self {
            Self::Success { data } => match data.get("report").and_then(Value::as_str) {
                Some(report) => report.to_string(),
                None => serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string()),
            },
            Self::Error { error_message } => error_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serialization() {
        let output = ToolOutput::success(json!({ "symbol": "AAPL" }));
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value, json!({ "status": "success", "data": { "symbol": "AAPL" } }));
    }

    #[test]
    fn test_error_serialization() {
        let output = ToolOutput::error("No data found for symbol ZZZZ");
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(
            value,
            json!({ "status": "error", "error_message": "No data found for symbol ZZZZ" })
        );
        assert!(!output.is_success());
        assert!(output.data().is_none());
    }

    #[test]
    fn test_text_prefers_report() {
        let output = ToolOutput::success(json!({ "report": "Top Gainers:\n1. ABC", "count": 1 }));
        assert_eq!(output.text(), "Top Gainers:\n1. ABC");

        let output = ToolOutput::success(json!({ "count": 1 }));
        assert!(output.text().contains("\"count\": 1"));

        let output = ToolOutput::error("boom");
        assert_eq!(output.text(), "boom");
        assert_eq!(output.error_message(), Some("boom"));
    }
}
