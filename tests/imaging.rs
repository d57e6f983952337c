//! Image transformer tests

mod common;

use common::{TEST_EXIF, decode_jpeg, encode, gradient, jpeg_with_exif, solid};
use image::{GenericImageView, ImageFormat};
use mediakit::error::ImageError;
use mediakit::imaging::exif::find_exif;
use mediakit::{ImageTransformer, ResizeRequest};

fn transformer() -> ImageTransformer {
    ImageTransformer::new(&common::test_config().image)
}

#[tokio::test]
async fn test_large_photo_fits_target_box() {
    let source = encode(&gradient(4000, 3000), ImageFormat::Bmp);
    let result = transformer()
        .transform(&source, &ResizeRequest::new(800, 600))
        .await
        .unwrap();

    assert_eq!((result.source_width, result.source_height), (4000, 3000));
    assert_eq!((result.width, result.height), (800, 600));

    let output = decode_jpeg(&result.bytes);
    assert_eq!(output.dimensions(), (800, 600));
}

#[tokio::test]
async fn test_aspect_ratio_preserved() {
    let source = encode(&gradient(1000, 500), ImageFormat::Png);
    let result = transformer()
        .transform(&source, &ResizeRequest::new(300, 300))
        .await
        .unwrap();

    assert_eq!(result.width, 300);
    assert!((result.height as i64 - 150).abs() <= 1);
}

#[tokio::test]
async fn test_portrait_capped_by_height() {
    let source = encode(&gradient(600, 1200), ImageFormat::Png);
    let result = transformer()
        .transform(&source, &ResizeRequest::new(800, 600))
        .await
        .unwrap();

    assert_eq!(result.height, 600);
    assert!((result.width as i64 - 300).abs() <= 1);
}

#[tokio::test]
async fn test_small_image_not_upscaled() {
    let source = encode(&gradient(64, 48), ImageFormat::Png);
    let result = transformer()
        .transform(&source, &ResizeRequest::new(800, 600))
        .await
        .unwrap();

    assert_eq!((result.width, result.height), (64, 48));
}

#[tokio::test]
async fn test_border_adds_four_pixels() {
    let source = encode(&solid(400, 300, [200, 200, 200]), ImageFormat::Png);
    let transformer = transformer();

    let plain = transformer
        .transform(&source, &ResizeRequest::new(200, 200).with_quality(95))
        .await
        .unwrap();
    let bordered = transformer
        .transform(
            &source,
            &ResizeRequest::new(200, 200).with_quality(95).with_border(true),
        )
        .await
        .unwrap();

    assert_eq!(bordered.width, plain.width + 4);
    assert_eq!(bordered.height, plain.height + 4);

    let output = decode_jpeg(&bordered.bytes).to_rgb8();
    assert_eq!(output.dimensions(), (bordered.width, bordered.height));

    let corner = output.get_pixel(0, 0);
    for channel in corner.0 {
        assert!((channel as i32 - 60).abs() <= 15, "corner pixel {:?}", corner);
    }
    let center = output.get_pixel(bordered.width / 2, bordered.height / 2);
    for channel in center.0 {
        assert!((channel as i32 - 200).abs() <= 15, "center pixel {:?}", center);
    }
}

#[tokio::test]
async fn test_corrupt_bytes_fail_to_decode() {
    let transformer = transformer();
    let request = ResizeRequest::new(100, 100);

    let sources: [&[u8]; 3] = [b"", b"definitely not an image", &[0u8; 512]];
    for source in sources {
        let result = transformer.transform(source, &request).await;
        assert!(matches!(result, Err(ImageError::Decode(_))), "{:?}", result);
    }
}

#[tokio::test]
async fn test_quality_out_of_range() {
    let source = encode(&gradient(32, 32), ImageFormat::Png);
    let transformer = transformer();

    for quality in [0, 101, 255] {
        let request = ResizeRequest::new(16, 16).with_quality(quality);
        let result = transformer.transform(&source, &request).await;
        assert!(matches!(result, Err(ImageError::Encode(_))));
    }
}

#[tokio::test]
async fn test_zero_target_rejected() {
    let source = encode(&gradient(32, 32), ImageFormat::Png);
    let result = transformer()
        .transform(&source, &ResizeRequest::new(0, 16))
        .await;
    assert!(matches!(result, Err(ImageError::InvalidTarget { .. })));
}

#[tokio::test]
async fn test_exif_retained_when_not_stripped() {
    let source = jpeg_with_exif(120, 80);
    let request = ResizeRequest::new(60, 60).with_strip_exif(false);

    let result = transformer().transform(&source, &request).await.unwrap();

    assert!(result.exif_retained);
    assert_eq!(find_exif(&result.bytes), Some(TEST_EXIF));
    assert_eq!(decode_jpeg(&result.bytes).dimensions(), (60, 40));
}

#[tokio::test]
async fn test_exif_stripped() {
    let source = jpeg_with_exif(120, 80);
    let request = ResizeRequest::new(60, 60).with_strip_exif(true);

    let result = transformer().transform(&source, &request).await.unwrap();

    assert!(!result.exif_retained);
    assert_eq!(find_exif(&result.bytes), None);
}

#[tokio::test]
async fn test_source_without_exif() {
    let source = encode(&gradient(50, 50), ImageFormat::Png);
    let request = ResizeRequest::new(20, 20).with_strip_exif(false);

    let result = transformer().transform(&source, &request).await.unwrap();
    assert!(!result.exif_retained);
}

#[tokio::test]
async fn test_transparent_png_becomes_jpeg() {
    let rgba = image::DynamicImage::new_rgba8(40, 30);
    let source = encode(&rgba, ImageFormat::Png);

    let result = transformer()
        .transform(&source, &ResizeRequest::new(20, 20))
        .await
        .unwrap();

    assert_eq!(&result.bytes[..2], &[0xFF, 0xD8]);
    assert_eq!((result.width, result.height), (20, 15));
}

#[tokio::test]
async fn test_transform_default_uses_config() {
    let mut config = common::test_config();
    config.image.default_width = 100;
    config.image.default_height = 100;
    config.image.add_border = true;
    let transformer = ImageTransformer::new(&config.image);

    let source = encode(&gradient(400, 200), ImageFormat::Png);
    let result = transformer.transform_default(&source).await.unwrap();

    assert_eq!((result.width, result.height), (104, 54));
    assert_eq!(transformer.default_request().quality, 80);
}

#[tokio::test]
async fn test_oversized_source_rejected() {
    let mut config = common::test_config();
    config.image.max_source_pixels = 10_000;
    let transformer = ImageTransformer::new(&config.image);

    let source = encode(&gradient(200, 200), ImageFormat::Png);
    let result = transformer.transform(&source, &ResizeRequest::new(50, 50)).await;
    assert!(matches!(result, Err(ImageError::Decode(_))));
}

#[tokio::test]
async fn test_wide_panorama_capped_at_jpeg_limit() {
    let source = encode(&gradient(70_000, 4), ImageFormat::Png);
    let transformer = transformer();

    let plain = transformer
        .transform(&source, &ResizeRequest::new(100_000, 100_000))
        .await
        .unwrap();
    assert_eq!(plain.width, 65_535);

    let bordered = transformer
        .transform(&source, &ResizeRequest::new(100_000, 100_000).with_border(true))
        .await
        .unwrap();
    assert_eq!(bordered.width, 65_535);
    assert_eq!(&bordered.bytes[..2], &[0xFF, 0xD8]);
}
