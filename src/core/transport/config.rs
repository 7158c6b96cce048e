//! Transport configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Transport configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Append every inbound and outbound frame to this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_log: Option<PathBuf>,
}

impl TransportConfig {
    /// Create a plain STDIO transport config.
    pub fn stdio() -> Self {
        Self::default()
    }

    /// Record protocol frames to the given file.
    pub fn with_frame_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.frame_log = Some(path.into());
        self
    }

    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        let frame_log = std::env::var("MCP_FRAME_LOG")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self { frame_log }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match &self.frame_log {
            Some(path) => format!("STDIO (frames logged to {})", path.display()),
            None => "STDIO (standard MCP mode)".to_string(),
        }
    }
}
