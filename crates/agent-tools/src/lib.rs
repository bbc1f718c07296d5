//! Tool management and execution framework
//!
//! This crate provides a framework for defining tools (functions) that a
//! conversational front end can call, together with the registry that maps a
//! tool name to its argument schema and callable.

pub mod definition;
pub mod output;
pub mod registry;
pub mod tool;

pub use definition::{ToolDefinition, schema};
pub use output::ToolOutput;
pub use registry::ToolRegistry;
pub use tool::Tool;
