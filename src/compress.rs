//! Client-side photo downscaling.
//!
//! Photos are decoded, turned upright according to their EXIF orientation,
//! shrunk so that neither side exceeds [`MAX_DIMENSION`], and re-encoded as
//! JPEG before upload.

use crate::error::{Result, ScrapbookError};
use crate::model::PhotoFile;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::io::Cursor;

/// Largest width or height, in pixels, of a compressed photo.
pub const MAX_DIMENSION: u32 = 1200;

/// JPEG quality used when none is configured.
pub const DEFAULT_QUALITY: f32 = 0.8;

pub const OUTPUT_CONTENT_TYPE: &str = "image/jpeg";

/// Compress `file` with the default size limit.
pub fn compress(file: &PhotoFile, quality: f32) -> Result<PhotoFile> {
    compress_with_limit(file, quality, MAX_DIMENSION)
}

/// Decode, downscale to at most `max_dimension` on the longer side, and
/// re-encode as JPEG. Never upscales. The logical file name is kept.
///
/// The EXIF block is not carried over, so its orientation is applied to the
/// pixels first.
pub fn compress_with_limit(file: &PhotoFile, quality: f32, max_dimension: u32) -> Result<PhotoFile> {
    let jpeg_quality = jpeg_quality(quality)?;

    let mut decoder = ImageReader::new(Cursor::new(&file.bytes))
        .with_guessed_format()
        .map_err(|e| decode_error(file, e))?
        .into_decoder()
        .map_err(|e| decode_error(file, e))?;
    let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
    let mut image = DynamicImage::from_decoder(decoder).map_err(|e| decode_error(file, e))?;
    image.apply_orientation(orientation);

    let (width, height) = (image.width(), image.height());
    let (new_width, new_height) = scaled_dimensions(width, height, max_dimension);

    let image = if (new_width, new_height) != (width, height) {
        image.resize_exact(new_width, new_height, FilterType::Triangle)
    } else {
        image
    };

    // JPEG has no alpha channel
    let rgb = image.to_rgb8();
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, jpeg_quality)
        .encode_image(&rgb)
        .map_err(|e| decode_error(file, e))?;

    tracing::debug!(
        name = %file.name,
        from = %format!("{}x{}", width, height),
        to = %format!("{}x{}", new_width, new_height),
        before = file.bytes.len(),
        after = bytes.len(),
        "Compressed photo"
    );

    Ok(PhotoFile::new(file.name.clone(), OUTPUT_CONTENT_TYPE, bytes))
}

fn decode_error(file: &PhotoFile, cause: impl std::fmt::Display) -> ScrapbookError {
    ScrapbookError::Decode(format!("{}: {}", file.name, cause))
}

/// Uniformly scale `(width, height)` so the longer side is at most `max_dimension`.
pub fn scaled_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }
    let ratio = (max_dimension as f64 / width as f64)
        .min(max_dimension as f64 / height as f64)
        .min(1.0);
    if ratio >= 1.0 {
        return (width, height);
    }
    let scale = |side: u32| ((side as f64 * ratio).round() as u32).max(1);
    (scale(width), scale(height))
}

fn jpeg_quality(quality: f32) -> Result<u8> {
    if !(quality > 0.0 && quality <= 1.0) {
        return Err(ScrapbookError::InvalidInput(format!(
            "Quality must be in (0, 1], got {}",
            quality
        )));
    }
    Ok(((quality * 100.0).round() as u8).clamp(1, 100))
}
