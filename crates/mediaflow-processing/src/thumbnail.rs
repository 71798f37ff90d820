//! Shared re-encode step: resize a decoded frame to the fixed thumbnail
//! width and encode it as JPEG.

use std::io::Cursor;

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use mediaflow_core::config::{MEDIA_STEP_TIMEOUT_MS, THUMBNAIL_QUALITY, THUMBNAIL_WIDTH};
use mediaflow_core::{PipelineError, ThumbnailResult};

use crate::timeout::{bounded, timeout_as_extraction};

/// Target dimensions for a source of `width` x `height`: fixed thumbnail
/// width, height rounded to preserve the aspect ratio (floored at 1px).
pub fn thumbnail_dimensions(width: u32, height: u32) -> (u32, u32) {
    let target_height =
        (THUMBNAIL_WIDTH as f64 * height as f64 / width as f64).round() as u32;
    (THUMBNAIL_WIDTH, target_height.max(1))
}

/// Pick a resize filter by downscale ratio: sharper filters only pay off
/// when the scale change is small.
fn select_filter(orig_width: u32, orig_height: u32, new_width: u32, new_height: u32) -> FilterType {
    let width_ratio = orig_width as f32 / new_width as f32;
    let height_ratio = orig_height as f32 / new_height as f32;
    let max_ratio = width_ratio.max(height_ratio);

    if max_ratio > 2.0 {
        FilterType::Triangle
    } else if max_ratio > 1.5 {
        FilterType::CatmullRom
    } else {
        FilterType::Lanczos3
    }
}

fn encode_jpeg(img: &DynamicImage, width: u32, height: u32) -> Result<Vec<u8>, String> {
    let filter = select_filter(img.width(), img.height(), width, height);
    let resized = img.resize_exact(width, height, filter);
    // JPEG has no alpha channel; flatten before encoding.
    let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());

    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut buf), THUMBNAIL_QUALITY);
    rgb.write_with_encoder(encoder).map_err(|e| e.to_string())?;
    Ok(buf)
}

/// Resize `img` to the fixed thumbnail width and encode as JPEG, bounded by
/// the step timeout. Fails if the source has a zero dimension or the encoder
/// produces no output.
pub async fn encode_thumbnail(
    name: &str,
    img: DynamicImage,
) -> Result<ThumbnailResult, PipelineError> {
    let (width_original, height_original) = img.dimensions();
    if width_original == 0 || height_original == 0 {
        return Err(PipelineError::Extraction {
            name: name.to_string(),
            reason: "source has no dimensions".to_string(),
        });
    }

    let (width_thumbnail, height_thumbnail) =
        thumbnail_dimensions(width_original, height_original);

    let encode = tokio::task::spawn_blocking(move || {
        encode_jpeg(&img, width_thumbnail, height_thumbnail)
    });
    let encoded = bounded("Thumbnail encode", MEDIA_STEP_TIMEOUT_MS, encode)
        .await
        .map_err(|e| timeout_as_extraction(name, e))?
        .map_err(|e| PipelineError::Extraction {
            name: name.to_string(),
            reason: format!("encode task failed: {}", e),
        })?
        .map_err(|reason| PipelineError::Extraction {
            name: name.to_string(),
            reason,
        })?;

    if encoded.is_empty() {
        return Err(PipelineError::Extraction {
            name: name.to_string(),
            reason: "encoder produced no output".to_string(),
        });
    }

    Ok(ThumbnailResult {
        data: Bytes::from(encoded),
        width_original,
        height_original,
        width_thumbnail,
        height_thumbnail,
    })
}
