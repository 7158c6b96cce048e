//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The catalog of available tools, in registration order
//! - Dispatch of tool calls by name, answering unknown names with text

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, warn};

use crate::core::config::Config;

use super::definitions::{AddTwoNumbersTool, ImageBorderTool, ImageMetaTool};
use super::{ToolError, ToolHandler};

/// Tool registry - maps tool names to their handlers.
///
/// Built once at startup and shared read-only by every request.
pub struct ToolRegistry {
    /// Handlers in registration order (the catalog order).
    handlers: Vec<Arc<dyn ToolHandler>>,

    /// Name lookup for dispatch.
    by_name: HashMap<&'static str, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create a registry with every built-in tool.
    pub fn new(config: Arc<Config>) -> Self {
        Self::empty()
            .register(ImageBorderTool::new(&config))
            .register(AddTwoNumbersTool::new())
            .register(ImageMetaTool::new(&config))
    }

    /// Create a registry with no tools.
    pub fn empty() -> Self {
        Self {
            handlers: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a tool. A later registration replaces an earlier one with
    /// the same name.
    pub fn register(mut self, handler: impl ToolHandler + 'static) -> Self {
        let handler: Arc<dyn ToolHandler> = Arc::new(handler);
        let name = handler.name();

        if self.by_name.insert(name, handler.clone()).is_some() {
            warn!("Tool {} registered twice, keeping the latest", name);
            self.handlers.retain(|h| h.name() != name);
        }
        self.handlers.push(handler);
        self
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        self.handlers.iter().map(|h| h.to_tool()).collect()
    }

    /// Check whether a tool is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Always produces exactly one result; unknown tools are answered with
    /// a text message rather than a protocol error.
    pub async fn call(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        match self.by_name.get(name) {
            Some(handler) => {
                info!("Calling tool: {}", name);
                handler.execute(arguments.unwrap_or_default()).await
            }
            None => {
                warn!("Unknown tool requested: {}", name);
                ToolError::unknown_tool(name).into_result()
            }
        }
    }
}
