//! Image Border MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes a
//! small set of tools over stdin/stdout:
//!
//! - **image-border**: fetch an image from a URL and add a colored border
//! - **image-meta**: report the width, height and byte size of an image URL
//! - **add-two-numbers**: add two numbers (plus a fixed offset of 100)
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and the
//!   stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: tool definitions and the registry that dispatches calls
//!
//! # Example
//!
//! ```rust,no_run
//! use image_border_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
