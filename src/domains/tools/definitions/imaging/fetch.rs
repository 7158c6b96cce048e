//! Image fetching over HTTP.
//!
//! Downloads are blocking (`reqwest::blocking`) and must run on the blocking
//! thread pool. Every failure mode, from a malformed URL to a 404, comes
//! back as [`FetchOutcome::Failed`].

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::core::config::FetchConfig;
use crate::domains::tools::ToolError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Result of an image download.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The server answered with a success status.
    Fetched { status: u16, body: Vec<u8> },
    /// The download failed; `reason` describes why.
    Failed { reason: String },
}

impl FetchOutcome {
    fn failed(reason: impl ToString) -> Self {
        let reason = reason.to_string();
        warn!("Image fetch failed: {}", reason);
        Self::Failed { reason }
    }

    /// Response body, or a fetch error.
    pub fn into_body(self) -> Result<Vec<u8>, ToolError> {
        match self {
            Self::Fetched { body, .. } => Ok(body),
            Self::Failed { reason } => Err(ToolError::fetch(reason)),
        }
    }
}

/// Download `url` and return its body.
///
/// Non-2xx statuses are failures. Redirects follow the client defaults.
pub fn fetch_image(url: &str, config: &FetchConfig) -> FetchOutcome {
    let client = match Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.timeout)
        .build()
    {
        Ok(client) => client,
        Err(e) => return FetchOutcome::failed(e),
    };

    debug!("Fetching image from {}", url);

    let response = match client.get(url).send().and_then(|r| r.error_for_status()) {
        Ok(response) => response,
        Err(e) => return FetchOutcome::failed(e),
    };

    let status = response.status().as_u16();
    match response.bytes() {
        Ok(body) => {
            debug!("Fetched {} bytes (HTTP {})", body.len(), status);
            FetchOutcome::Fetched {
                status,
                body: body.to_vec(),
            }
        }
        Err(e) => FetchOutcome::failed(e),
    }
}
