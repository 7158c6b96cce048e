//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod imaging;
pub mod math;

pub use imaging::{ImageBorderParams, ImageBorderTool, ImageMetaParams, ImageMetaTool};
pub use math::{AddTwoNumbersParams, AddTwoNumbersTool};
