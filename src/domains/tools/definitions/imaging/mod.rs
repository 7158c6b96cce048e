//! Image tools module.
//!
//! - `fetch`: download image bytes from a URL
//! - `color`: parse fill colors (named, hex, `rgb()`)
//! - `border`: the `image-border` tool
//! - `meta`: the `image-meta` tool

pub mod border;
pub mod color;
pub mod fetch;
pub mod meta;

pub use border::{ImageBorderParams, ImageBorderTool};
pub use fetch::{FetchOutcome, fetch_image};
pub use meta::{ImageMetaParams, ImageMetaResult, ImageMetaTool};

/// Test images encoded in memory.
#[cfg(test)]
pub(crate) mod fixtures {
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    /// Encode a solid-color RGBA image.
    pub fn encode(width: u32, height: u32, pixel: [u8; 4], format: ImageFormat) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(pixel));
        let img = match format {
            // JPEG has no alpha channel
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img).to_rgb8()),
            _ => DynamicImage::ImageRgba8(img),
        };
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), format)
            .expect("encode test image");
        bytes
    }

    /// A solid opaque PNG.
    pub fn png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        encode(width, height, [rgb[0], rgb[1], rgb[2], 255], ImageFormat::Png)
    }
}
