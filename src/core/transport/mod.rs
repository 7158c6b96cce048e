//! Transport layer for the MCP server.
//!
//! MCP messages travel as newline-delimited JSON-RPC over stdin/stdout.
//! Framing and the protocol handshake belong to `rmcp`; this module wires
//! the server handler to the process streams and can tap those streams into
//! a frame log for diagnostics.

mod config;
mod error;
pub mod frame_log;
mod service;
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use frame_log::{Direction, FrameLog};
pub use service::TransportService;
