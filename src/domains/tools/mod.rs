//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that MCP clients call by name.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `ToolHandler` trait every tool implements
//! - `registry.rs` - Tool catalog and call dispatch
//! - `common.rs` - Result builders and argument helpers shared by tools
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, the blocking logic and a `ToolHandler` impl
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `ToolRegistry::new`

pub mod common;
pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use error::ToolError;
pub use handlers::ToolHandler;
pub use registry::ToolRegistry;
