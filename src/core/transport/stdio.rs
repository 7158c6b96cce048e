//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP, optionally tapped by a
//! [`FrameLog`].

use std::path::Path;

use rmcp::ServiceExt;
use tracing::info;

use super::{FrameLog, TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until stdin is closed.
    pub async fn run(server: McpServer, frame_log: Option<&Path>) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = match frame_log {
            None => server
                .serve(rmcp::transport::stdio())
                .await
                .map_err(|e| TransportError::init(e.to_string()))?,
            Some(path) => {
                let log = FrameLog::open(path).await?;
                info!("Logging protocol frames to {}", path.display());
                server
                    .serve(log.tap(tokio::io::stdin(), tokio::io::stdout()))
                    .await
                    .map_err(|e| TransportError::init(e.to_string()))?
            }
        };

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
