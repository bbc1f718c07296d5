//! Error types for agent-core

use thiserror::Error;

/// Result type alias for agent-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent and tool operations
#[derive(Error, Debug)]
pub enum Error {
    /// Agent initialization failed
    #[error("Agent initialization failed: {0}")]
    InitializationFailed(String),

    /// Tool arguments did not match the tool's input schema
    #[error("Invalid parameters: {0}")]
    InvalidArguments(String),

    /// No tool registered under the requested name
    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    /// Tool ran but could not produce data; the message is user-facing as is
    #[error("{0}")]
    ToolFailed(String),
}
