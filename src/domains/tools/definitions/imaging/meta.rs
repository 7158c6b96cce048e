//! Image metadata tool.
//!
//! Reports the pixel dimensions of an image URL and the byte size of the
//! downloaded payload. Only the image header is decoded.

use std::io::Cursor;
use std::sync::Arc;

use image::ImageReader;
use rmcp::{
    handler::server::tool::schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument};

use crate::core::config::{Config, FetchConfig};
use crate::domains::tools::common::{object_schema, parse_arguments, run_blocking, structured_result};
use crate::domains::tools::{ToolError, ToolHandler};

use super::fetch::fetch_image;

/// Parameters for the image metadata tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageMetaParams {
    /// Public URL of the image.
    pub image_url: String,
}

/// Structured output for image metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImageMetaResult {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Size of the downloaded payload in bytes.
    pub size_bytes: u64,
}

impl ImageMetaResult {
    /// One-line text form returned to clients.
    pub fn summary(&self) -> String {
        format!(
            "Image Width: {}px, Height: {}px, Size: {} bytes",
            self.width, self.height, self.size_bytes
        )
    }
}

/// Image metadata tool implementation.
#[derive(Debug, Clone)]
pub struct ImageMetaTool {
    fetch: FetchConfig,
}

impl ImageMetaTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "image-meta";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the width, height, and file size (in bytes) of an image URL.";

    pub fn new(config: &Config) -> Self {
        Self {
            fetch: config.tools.fetch.clone(),
        }
    }

    /// Fetch and inspect (blocking).
    #[instrument(skip_all, fields(url = %params.image_url))]
    pub fn execute(params: &ImageMetaParams, fetch: &FetchConfig) -> Result<ImageMetaResult, ToolError> {
        let bytes = fetch_image(&params.image_url, fetch).into_body()?;
        let result = inspect(&bytes)?;
        info!("{}", result.summary());
        Ok(result)
    }
}

#[async_trait::async_trait]
impl ToolHandler for ImageMetaTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_tool(&self) -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: object_schema(json!({
                "type": "object",
                "properties": {
                    "image_url": {
                        "type": "string",
                        "description": "The public URL of the image."
                    }
                },
                "required": ["image_url"]
            })),
            annotations: None,
            output_schema: Some(Arc::new(schema_for_type::<ImageMetaResult>())),
            icons: None,
            meta: None,
            title: None,
        }
    }

    async fn execute(&self, arguments: JsonObject) -> CallToolResult {
        let params: ImageMetaParams = match parse_arguments(arguments) {
            Ok(params) => params,
            Err(e) => return e.into_result(),
        };
        let fetch = self.fetch.clone();

        match run_blocking(move || Self::execute(&params, &fetch)).await {
            Ok(meta) => structured_result(meta.summary(), meta),
            Err(e) => e.into_result(),
        }
    }
}

/// Read dimensions from the image header; the format is guessed from the
/// content, not the URL.
pub fn inspect(bytes: &[u8]) -> Result<ImageMetaResult, ToolError> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ToolError::process(e.to_string()))?
        .into_dimensions()
        .map_err(|e| ToolError::process(e.to_string()))?;

    Ok(ImageMetaResult {
        width,
        height,
        size_bytes: bytes.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;
    use crate::domains::tools::common::result_text;
    use image::ImageFormat;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_summary_format() {
        let meta = ImageMetaResult {
            width: 640,
            height: 480,
            size_bytes: 12345,
        };
        assert_eq!(
            meta.summary(),
            "Image Width: 640px, Height: 480px, Size: 12345 bytes"
        );
    }

    #[test]
    fn test_output_schema_describes_result() {
        let tool = ImageMetaTool::new(&Config::default()).to_tool();
        let schema = tool.output_schema.expect("output schema");
        let properties = schema["properties"].as_object().unwrap();
        for field in ["width", "height", "size_bytes"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn test_inspect_png_and_gif() {
        let png = fixtures::png(31, 17, [1, 2, 3]);
        let meta = inspect(&png).unwrap();
        assert_eq!((meta.width, meta.height), (31, 17));
        assert_eq!(meta.size_bytes, png.len() as u64);

        let gif = fixtures::encode(5, 9, [0, 0, 0, 255], ImageFormat::Gif);
        let meta = inspect(&gif).unwrap();
        assert_eq!((meta.width, meta.height), (5, 9));
    }

    #[test]
    fn test_inspect_rejects_unknown_format() {
        let err = inspect(b"plain text").unwrap_err();
        assert!(err.to_string().starts_with("Failed to process image:"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_tool_reports_dimensions_and_size() {
        let png = fixtures::png(64, 32, [0, 128, 0]);
        let size = png.len();

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photo"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(png))
            .mount(&server)
            .await;

        let tool = ImageMetaTool::new(&Config::default());
        let args = json!({ "image_url": format!("{}/photo", server.uri()) });
        let result = ToolHandler::execute(&tool, args.as_object().cloned().unwrap()).await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result_text(&result),
            format!("Image Width: 64px, Height: 32px, Size: {} bytes", size)
        );
        let structured: ImageMetaResult =
            serde_json::from_value(result.structured_content.unwrap()).unwrap();
        assert_eq!(structured.size_bytes, size as u64);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_tool_reports_unreachable_url() {
        // Nothing listens on the discard port
        let tool = ImageMetaTool::new(&Config::default());
        let args = json!({ "image_url": "http://127.0.0.1:9/gone.png" });
        let result = ToolHandler::execute(&tool, args.as_object().cloned().unwrap()).await;

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("Failed to fetch image:"));
    }
}
