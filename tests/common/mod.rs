//! Shared fixtures for integration tests

#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use mediakit::config::{AuthConfig, ImageConfig, MediaConfig, TokenConfig};
use mediakit::imaging::exif::embed_exif;
use std::io::Cursor;

pub const TEST_SECRET: &str = "test-secret-key";

/// Minimal little-endian TIFF header with an empty IFD
pub const TEST_EXIF: &[u8] = b"II*\0\x08\0\0\0\0\0\0\0\0\0";

/// Configuration with the cheapest bcrypt cost
pub fn test_config() -> MediaConfig {
    mediakit::utils::setup_logging();

    MediaConfig {
        auth: AuthConfig { bcrypt_cost: 4 },
        token: TokenConfig {
            secret: TEST_SECRET.to_string(),
            ttl_secs: 3600,
        },
        image: ImageConfig::default(),
    }
}

/// Diagonal gradient so resizes have real content to work on
pub fn gradient(width: u32, height: u32) -> DynamicImage {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    DynamicImage::ImageRgb8(image)
}

pub fn solid(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
}

pub fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .expect("failed to encode fixture");
    bytes
}

/// JPEG fixture carrying `TEST_EXIF` in an APP1 segment
pub fn jpeg_with_exif(width: u32, height: u32) -> Vec<u8> {
    let jpeg = encode(&gradient(width, height), ImageFormat::Jpeg);
    embed_exif(&jpeg, TEST_EXIF).expect("failed to embed exif")
}

/// Decode transformer output back into pixels
pub fn decode_jpeg(bytes: &[u8]) -> DynamicImage {
    image::load_from_memory_with_format(bytes, ImageFormat::Jpeg).expect("output is not a JPEG")
}
