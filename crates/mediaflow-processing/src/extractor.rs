//! Media-type dispatch for thumbnail extraction.

use async_trait::async_trait;

use mediaflow_core::{MediaFile, MediaType, PipelineError, ThumbnailResult};

use crate::image_source::thumbnail_from_image;
use crate::video_source::FrameExtractor;

/// Thumbnail extraction seam. The orchestrator only sees this trait, so
/// tests can substitute a canned extractor.
#[async_trait]
pub trait ThumbnailExtract: Send + Sync {
    async fn extract(&self, file: &MediaFile) -> Result<ThumbnailResult, PipelineError>;
}

/// Default extractor: `image` crate for images, ffmpeg first frame for
/// videos, shared resize/encode step for both.
pub struct ThumbnailExtractor {
    frames: FrameExtractor,
}

impl ThumbnailExtractor {
    pub fn new(ffmpeg_path: impl Into<String>) -> Result<Self, PipelineError> {
        Ok(Self {
            frames: FrameExtractor::new(ffmpeg_path)?,
        })
    }
}

#[async_trait]
impl ThumbnailExtract for ThumbnailExtractor {
    async fn extract(&self, file: &MediaFile) -> Result<ThumbnailResult, PipelineError> {
        match file.media_type() {
            MediaType::Image => thumbnail_from_image(file).await,
            MediaType::Video => self.frames.thumbnail_from_video(file).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use image::{DynamicImage, ImageFormat, RgbaImage};
    use std::io::Cursor;

    #[tokio::test]
    async fn dispatches_images_to_the_image_path() {
        let img = RgbaImage::new(800, 600);
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        let file = MediaFile::new("pic.png", "image/png", Bytes::from(buf.into_inner()));

        let extractor = ThumbnailExtractor::new("ffmpeg").unwrap();
        let result = extractor.extract(&file).await.unwrap();
        assert_eq!(result.width_thumbnail, 640);
        assert_eq!(result.height_thumbnail, 480);
    }

    #[tokio::test]
    async fn unknown_mime_takes_the_image_path() {
        // Permissive classification: non-video MIME types decode as images,
        // so junk bytes surface as an image decode failure.
        let file = MediaFile::new("blob.bin", "application/octet-stream", Bytes::from_static(b"xx"));
        let extractor = ThumbnailExtractor::new("ffmpeg").unwrap();
        let err = extractor.extract(&file).await.unwrap_err();
        assert!(matches!(err, PipelineError::Extraction { .. }));
    }
}
