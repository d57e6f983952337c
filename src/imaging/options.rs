//! Resize request options

use crate::config::ImageConfig;
use crate::error::ImageError;
use image::Rgb;

/// Margin added to each edge when a border is requested
pub const BORDER_WIDTH: u32 = 2;

/// Largest width or height a baseline JPEG can record
pub const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

/// Border fill, dark gray
pub const BORDER_COLOR: Rgb<u8> = Rgb([60, 60, 60]);

/// What to produce from one source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeRequest {
    pub target_width: u32,
    pub target_height: u32,
    /// JPEG quality, 1..=100
    pub quality: u8,
    pub strip_exif: bool,
    pub add_border: bool,
}

impl ResizeRequest {
    pub fn new(target_width: u32, target_height: u32) -> Self {
        Self {
            target_width,
            target_height,
            quality: 80,
            strip_exif: true,
            add_border: false,
        }
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_strip_exif(mut self, strip_exif: bool) -> Self {
        self.strip_exif = strip_exif;
        self
    }

    pub fn with_border(mut self, add_border: bool) -> Self {
        self.add_border = add_border;
        self
    }

    /// Box the resized image must fit in, leaving room for the border and
    /// staying within what a JPEG can encode.
    pub fn output_bounds(&self) -> (u32, u32) {
        let margin = if self.add_border { 2 * BORDER_WIDTH } else { 0 };
        let cap = MAX_JPEG_DIMENSION - margin;
        (self.target_width.min(cap), self.target_height.min(cap))
    }

    /// Checks the request before any decoding work is done.
    pub fn validate(&self) -> Result<(), ImageError> {
        if self.target_width == 0 || self.target_height == 0 {
            return Err(ImageError::InvalidTarget {
                width: self.target_width,
                height: self.target_height,
            });
        }

        if !(1..=100).contains(&self.quality) {
            return Err(ImageError::Encode(format!(
                "quality {} is outside 1..=100",
                self.quality
            )));
        }

        Ok(())
    }
}

impl From<&ImageConfig> for ResizeRequest {
    fn from(config: &ImageConfig) -> Self {
        Self {
            target_width: config.default_width,
            target_height: config.default_height,
            quality: config.default_quality,
            strip_exif: config.strip_exif,
            add_border: config.add_border,
        }
    }
}
