//! Thumbnail extraction from image files.

use std::io::Cursor;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use mediaflow_core::config::MEDIA_STEP_TIMEOUT_MS;
use mediaflow_core::{MediaFile, PipelineError, ThumbnailResult};

use crate::thumbnail::encode_thumbnail;
use crate::timeout::{bounded, timeout_as_extraction};

fn decode_image(data: &[u8]) -> Result<DynamicImage, String> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| e.to_string())?;
    // Full decode, not just the header: dimensions must come from pixels we
    // can actually render.
    reader.decode().map_err(|e| e.to_string())
}

/// Extract a thumbnail from an image file. The decode step runs on the
/// blocking pool and is bounded by the step timeout.
pub async fn thumbnail_from_image(file: &MediaFile) -> Result<ThumbnailResult, PipelineError> {
    let name = file.name.clone();
    let data = file.data.clone();

    let decode = tokio::task::spawn_blocking(move || decode_image(&data));
    let img = bounded("Image decode", MEDIA_STEP_TIMEOUT_MS, decode)
        .await
        .map_err(|e| timeout_as_extraction(&name, e))?
        .map_err(|e| PipelineError::Extraction {
            name: name.clone(),
            reason: format!("decode task failed: {}", e),
        })?
        .map_err(|reason| PipelineError::Extraction {
            name: name.clone(),
            reason,
        })?;

    debug!(file = %name, width = img.width(), height = img.height(), "decoded image");
    encode_thumbnail(&name, img).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use image::{ImageFormat, RgbaImage};

    fn png_file(name: &str, width: u32, height: u32) -> MediaFile {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([10, 120, 200, 255]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        MediaFile::new(name, "image/png", Bytes::from(buf.into_inner()))
    }

    #[tokio::test]
    async fn image_1200x800_yields_640x427() {
        let file = png_file("photo.png", 1200, 800);
        let result = thumbnail_from_image(&file).await.unwrap();
        assert_eq!(result.width_original, 1200);
        assert_eq!(result.height_original, 800);
        assert_eq!(result.width_thumbnail, 640);
        assert_eq!(result.height_thumbnail, 427);
    }

    #[tokio::test]
    async fn repeated_extraction_yields_identical_dimensions() {
        let file = png_file("photo.png", 1013, 677);
        let first = thumbnail_from_image(&file).await.unwrap();
        let second = thumbnail_from_image(&file).await.unwrap();
        // Encoded bytes may differ run to run; dimensions must not.
        assert_eq!(first.width_thumbnail, second.width_thumbnail);
        assert_eq!(first.height_thumbnail, second.height_thumbnail);
        assert_eq!(first.width_original, second.width_original);
        assert_eq!(first.height_original, second.height_original);
    }

    #[tokio::test]
    async fn undecodable_bytes_fail_extraction() {
        let file = MediaFile::new("junk.png", "image/png", Bytes::from_static(b"not an image"));
        let err = thumbnail_from_image(&file).await.unwrap_err();
        match err {
            PipelineError::Extraction { name, .. } => assert_eq!(name, "junk.png"),
            other => panic!("expected extraction error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn thumbnail_bytes_are_jpeg() {
        let file = png_file("photo.png", 640, 480);
        let result = thumbnail_from_image(&file).await.unwrap();
        let format = image::guess_format(&result.data).unwrap();
        assert_eq!(format, ImageFormat::Jpeg);
    }
}
