//! Resize pipeline
//!
//! Decoding, resizing and encoding are CPU-bound and run on the blocking
//! thread pool. Each call works on its own copy of the source bytes.

use super::exif::{EXIF_HEADER, MAX_EXIF_BYTES, embed_exif};
use super::options::{BORDER_COLOR, BORDER_WIDTH, ResizeRequest};
use super::results::TransformResult;
use crate::config::ImageConfig;
use crate::error::ImageError;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageDecoder, ImageReader, RgbImage};
use log::{debug, warn};
use std::io::Cursor;

/// Produces resized JPEGs from uploaded image bytes.
#[derive(Debug, Clone)]
pub struct ImageTransformer {
    defaults: ResizeRequest,
    max_source_pixels: u64,
}

impl ImageTransformer {
    pub fn new(config: &ImageConfig) -> Self {
        Self {
            defaults: ResizeRequest::from(config),
            max_source_pixels: config.max_source_pixels,
        }
    }

    /// Request built from the configured defaults
    pub fn default_request(&self) -> ResizeRequest {
        self.defaults
    }

    /// Run the pipeline with the configured defaults.
    pub async fn transform_default(&self, source: &[u8]) -> Result<TransformResult, ImageError> {
        self.transform(source, &self.defaults).await
    }

    /// Decode `source`, fit it inside the target box, optionally keep EXIF
    /// and add a border, then encode as JPEG.
    ///
    /// # Errors
    /// - `ImageError::InvalidTarget` for a zero target dimension
    /// - `ImageError::Encode` for quality outside 1..=100 or an encoder failure
    /// - `ImageError::Decode` for unsupported, corrupt or oversized input
    pub async fn transform(
        &self,
        source: &[u8],
        request: &ResizeRequest,
    ) -> Result<TransformResult, ImageError> {
        request.validate()?;

        let source = source.to_vec();
        let request = *request;
        let max_pixels = self.max_source_pixels;

        tokio::task::spawn_blocking(move || run_pipeline(&source, &request, max_pixels))
            .await
            .map_err(|e| ImageError::Task(format!("task join error: {}", e)))?
    }
}

fn run_pipeline(
    source: &[u8],
    request: &ResizeRequest,
    max_pixels: u64,
) -> Result<TransformResult, ImageError> {
    let (image, exif) = decode_source(source, max_pixels, !request.strip_exif)?;
    let (source_width, source_height) = (image.width(), image.height());

    let (max_width, max_height) = request.output_bounds();
    let resized = fit_inside(image, max_width, max_height);

    let mut rgb = resized.into_rgb8();
    if request.add_border {
        rgb = add_border(&rgb);
    }

    let mut bytes = encode_jpeg(&rgb, request.quality)?;

    let mut exif_retained = false;
    if let Some(exif) = exif {
        match embed_exif(&bytes, &exif) {
            Some(with_exif) => {
                bytes = with_exif;
                exif_retained = true;
            }
            None => warn!(
                "Dropping EXIF block of {} bytes: {}",
                exif.len(),
                exif_drop_reason(&exif)
            ),
        }
    }

    debug!(
        "Transformed {}x{} image to {}x{} JPEG ({} bytes)",
        source_width,
        source_height,
        rgb.width(),
        rgb.height(),
        bytes.len()
    );

    Ok(TransformResult {
        bytes,
        width: rgb.width(),
        height: rgb.height(),
        source_width,
        source_height,
        exif_retained,
    })
}

fn exif_drop_reason(exif: &[u8]) -> String {
    let tiff = exif.strip_prefix(EXIF_HEADER).unwrap_or(exif);
    if tiff.is_empty() {
        "block is empty".to_string()
    } else if tiff.len() > MAX_EXIF_BYTES {
        format!("larger than the {} byte segment limit", MAX_EXIF_BYTES)
    } else {
        "encoded JPEG has no usable header to insert it after".to_string()
    }
}

fn decode_source(
    source: &[u8],
    max_pixels: u64,
    want_exif: bool,
) -> Result<(DynamicImage, Option<Vec<u8>>), ImageError> {
    let reader = ImageReader::new(Cursor::new(source))
        .with_guessed_format()
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    if reader.format().is_none() {
        return Err(ImageError::Decode("unrecognized image format".into()));
    }

    let mut decoder = reader
        .into_decoder()
        .map_err(|e| ImageError::Decode(e.to_string()))?;

    let (width, height) = decoder.dimensions();
    if u64::from(width) * u64::from(height) > max_pixels {
        return Err(ImageError::Decode(format!(
            "{}x{} image exceeds the {} pixel limit",
            width, height, max_pixels
        )));
    }

    let exif = if want_exif {
        decoder.exif_metadata().unwrap_or_else(|e| {
            debug!("Ignoring unreadable EXIF block: {}", e);
            None
        })
    } else {
        None
    };

    let image =
        DynamicImage::from_decoder(decoder).map_err(|e| ImageError::Decode(e.to_string()))?;
    Ok((image, exif))
}

/// Scale down to fit the box, keeping the aspect ratio. Images that already
/// fit are returned unchanged.
fn fit_inside(image: DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    if image.width() <= max_width && image.height() <= max_height {
        return image;
    }
    image.resize(max_width, max_height, FilterType::Lanczos3)
}

fn add_border(image: &RgbImage) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(
        image.width() + 2 * BORDER_WIDTH,
        image.height() + 2 * BORDER_WIDTH,
        BORDER_COLOR,
    );
    imageops::replace(&mut canvas, image, BORDER_WIDTH.into(), BORDER_WIDTH.into());
    canvas
}

fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    image
        .write_with_encoder(encoder)
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(bytes)
}
