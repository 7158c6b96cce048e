//! Image border tool.
//!
//! Fetches an image, flattens it to RGB, pads every edge with a solid fill
//! color and returns the result as a base64-encoded PNG.

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, imageops};
use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::core::config::{Config, FetchConfig, ImageConfig};
use crate::domains::tools::ToolHandler;
use crate::domains::tools::ToolError;
use crate::domains::tools::common::{object_schema, parse_arguments, run_blocking, success_result};

use super::color::parse_color;
use super::fetch::fetch_image;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the image border tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageBorderParams {
    /// Public URL of the source image.
    pub image_url: String,

    /// Border width in pixels, added to each edge.
    pub border_thickness: u32,

    /// Fill color: a named color, hex string or color function.
    pub border_color: String,
}

// ============================================================================
// Tool Implementation
// ============================================================================

/// Image border tool implementation.
#[derive(Debug, Clone)]
pub struct ImageBorderTool {
    fetch: FetchConfig,
    limits: ImageConfig,
}

impl ImageBorderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "image-border";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add a colored border to an image from a URL";

    pub fn new(config: &Config) -> Self {
        Self {
            fetch: config.tools.fetch.clone(),
            limits: config.tools.image.clone(),
        }
    }

    /// Fetch, border and encode (blocking).
    #[instrument(skip_all, fields(url = %params.image_url))]
    pub fn execute(
        params: &ImageBorderParams,
        fetch: &FetchConfig,
        limits: &ImageConfig,
    ) -> Result<String, ToolError> {
        info!(
            "Adding {}px {} border",
            params.border_thickness, params.border_color
        );

        let bytes = fetch_image(&params.image_url, fetch).into_body()?;
        let png = add_border(&bytes, params.border_thickness, &params.border_color, limits)?;

        info!("Bordered image encoded ({} bytes PNG)", png.len());
        Ok(BASE64.encode(png))
    }
}

#[async_trait::async_trait]
impl ToolHandler for ImageBorderTool {
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
                    "image_url": {"type": "string", "description": "Public image URL"},
                    "border_thickness": {"type": "integer", "minimum": 0},
                    "border_color": {"type": "string", "description": "e.g., black, red, #FF0000"}
                },
                "required": ["image_url", "border_thickness", "border_color"]
            })),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    async fn execute(&self, arguments: JsonObject) -> CallToolResult {
        let params: ImageBorderParams = match parse_arguments(arguments) {
            Ok(params) => params,
            Err(e) => return e.into_result(),
        };
        let fetch = self.fetch.clone();
        let limits = self.limits.clone();

        match run_blocking(move || Self::execute(&params, &fetch, &limits)).await {
            Ok(encoded) => success_result(encoded),
            Err(e) => e.into_result(),
        }
    }
}

/// Decode `bytes`, pad it by `thickness` pixels of `color` on every side
/// and return the PNG encoding.
///
/// Decode failures are [`ToolError::Open`]; everything after decoding
/// (color, canvas size, encoding) is [`ToolError::Border`].
pub fn add_border(
    bytes: &[u8],
    thickness: u32,
    color: &str,
    limits: &ImageConfig,
) -> Result<Vec<u8>, ToolError> {
    let source = image::load_from_memory(bytes)
        .map_err(|e| ToolError::open(e.to_string()))?
        .to_rgb8();

    let fill = parse_color(color).map_err(|e| ToolError::border(e.to_string()))?;

    let (width, height) = source.dimensions();
    let padded = |side: u32| {
        thickness
            .checked_mul(2)
            .and_then(|pad| side.checked_add(pad))
    };
    let (Some(new_width), Some(new_height)) = (padded(width), padded(height)) else {
        return Err(ToolError::border(format!(
            "border thickness {} is too large",
            thickness
        )));
    };

    let area = u64::from(new_width) * u64::from(new_height);
    if area > limits.max_canvas_pixels {
        return Err(ToolError::border(format!(
            "bordered image would be {}x{} pixels, above the limit of {}",
            new_width, new_height, limits.max_canvas_pixels
        )));
    }

    let mut canvas = RgbImage::from_pixel(new_width, new_height, Rgb(fill));
    imageops::replace(&mut canvas, &source, i64::from(thickness), i64::from(thickness));

    let mut png = Vec::new();
    DynamicImage::ImageRgb8(canvas)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| ToolError::border(e.to_string()))?;

    Ok(png)
}

// ============================================================================
// Tests
// ============================================================================
