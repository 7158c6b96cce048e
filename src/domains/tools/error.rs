//! Tool-specific error types.
//!
//! Every variant renders as the human-readable text returned to the client.

use rmcp::model::{CallToolResult, Content};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool name.")]
    UnknownTool(String),

    /// Arguments were missing or had the wrong type.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The image could not be downloaded.
    #[error("Failed to fetch image: {0}")]
    Fetch(String),

    /// The downloaded bytes could not be decoded as an image.
    #[error("Error opening image: {0}")]
    Open(String),

    /// The image header could not be read.
    #[error("Failed to process image: {0}")]
    Process(String),

    /// The border could not be applied or the result encoded.
    #[error("Error adding border: {0}")]
    Border(String),

    /// A numeric argument could not be parsed.
    #[error("Error: could not convert string to float: '{0}'")]
    NotANumber(String),

    /// The blocking worker running the tool failed.
    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new fetch error.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a new decode error.
    pub fn open(msg: impl Into<String>) -> Self {
        Self::Open(msg.into())
    }

    /// Create a new header inspection error.
    pub fn process(msg: impl Into<String>) -> Self {
        Self::Process(msg.into())
    }

    /// Create a new border error.
    pub fn border(msg: impl Into<String>) -> Self {
        Self::Border(msg.into())
    }

    /// Create a new "not a number" error.
    pub fn not_a_number(input: impl Into<String>) -> Self {
        Self::NotANumber(input.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// Convert into the text result returned to the client.
    pub fn into_result(self) -> CallToolResult {
        warn!("{}", self);
        CallToolResult::error(vec![Content::text(self.to_string())])
    }
}

impl From<ToolError> for CallToolResult {
    fn from(err: ToolError) -> Self {
        err.into_result()
    }
}
