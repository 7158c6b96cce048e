//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally via a `.env` file) on top of defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Default upper bound on the area of a bordered image.
pub const DEFAULT_MAX_CANVAS_PIXELS: u64 = 100_000_000;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Tools domain configuration.
    pub tools: ToolsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name reported to clients during the handshake and in logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the tools domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Outbound image fetches.
    pub fetch: FetchConfig,

    /// Image processing limits.
    pub image: ImageConfig,
}

/// Configuration for outbound HTTP image fetches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Total request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// Limits applied while transforming images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Maximum number of pixels a bordered canvas may contain.
    pub max_canvas_pixels: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_canvas_pixels: DEFAULT_MAX_CANVAS_PIXELS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mcp-image-border".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            tools: ToolsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `MCP_`, for example
    /// `MCP_SERVER_NAME`, `MCP_LOG_LEVEL` or `MCP_FETCH_TIMEOUT_SECS`.
    /// Values that fail to parse are reported and the default is kept.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(with_timestamps) = env_parse::<bool>("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = with_timestamps;
        }

        // 0 disables the timeout, same as leaving it unset
        if let Some(secs) = env_parse::<u64>("MCP_FETCH_TIMEOUT_SECS") {
            config.tools.fetch.timeout = (secs > 0).then(|| Duration::from_secs(secs));
            info!("Image fetch timeout: {:?}", config.tools.fetch.timeout);
        }

        if let Some(max_pixels) = env_parse::<u64>("MCP_MAX_CANVAS_PIXELS") {
            config.tools.image.max_canvas_pixels = max_pixels;
        }

        config.transport = TransportConfig::from_env();

        config
    }

    /// Check that the configuration is usable before starting the server.
    pub fn validate(&self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::config("server name must not be empty"));
        }
        if self.tools.image.max_canvas_pixels == 0 {
            return Err(Error::config("MCP_MAX_CANVAS_PIXELS must be greater than 0"));
        }
        Ok(())
    }
}

/// Read and parse an environment variable, warning when it is malformed.
fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid value for {}: {:?}", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.server.name, "mcp-image-border");
        assert!(config.tools.fetch.timeout.is_none());
        assert_eq!(config.tools.image.max_canvas_pixels, DEFAULT_MAX_CANVAS_PIXELS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fetch_timeout_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_FETCH_TIMEOUT_SECS", "15");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.fetch.timeout, Some(Duration::from_secs(15)));

        unsafe {
            std::env::set_var("MCP_FETCH_TIMEOUT_SECS", "0");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.fetch.timeout, None);

        unsafe {
            std::env::remove_var("MCP_FETCH_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_invalid_env_value_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_MAX_CANVAS_PIXELS", "lots");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.image.max_canvas_pixels, DEFAULT_MAX_CANVAS_PIXELS);
        unsafe {
            std::env::remove_var("MCP_MAX_CANVAS_PIXELS");
        }
    }

    #[test]
    fn test_validate_rejects_zero_canvas() {
        let mut config = Config::default();
        config.tools.image.max_canvas_pixels = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("MCP_MAX_CANVAS_PIXELS"));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut config = Config::default();
        config.server.name = "   ".to_string();
        assert!(config.validate().is_err());
    }
}
