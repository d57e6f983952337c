//! Image transformer
//!
//! Turns uploaded image bytes into a resized JPEG through a fixed pipeline:
//! decode, fit-inside resize, optional EXIF carry-over, optional border, encode.

pub mod exif;
pub mod options;
pub mod pipeline;
pub mod results;

pub use options::{BORDER_COLOR, BORDER_WIDTH, MAX_JPEG_DIMENSION, ResizeRequest};
pub use pipeline::ImageTransformer;
pub use results::TransformResult;
