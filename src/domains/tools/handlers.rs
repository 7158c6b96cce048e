//! Tool handler trait.
//!
//! Every tool implements [`ToolHandler`] and is registered once in the
//! [`ToolRegistry`](super::ToolRegistry). Handlers are plain values: no
//! global registration, no shared mutable state between calls.

use rmcp::model::{CallToolResult, JsonObject, Tool};

/// Trait for implementing tool handlers.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &'static str;

    /// Tool metadata advertised to clients (name, description, schemas).
    fn to_tool(&self) -> Tool;

    /// Execute the tool with the given arguments.
    ///
    /// Implementations never fail at the protocol level: every error is
    /// returned as a text result.
    async fn execute(&self, arguments: JsonObject) -> CallToolResult;
}
