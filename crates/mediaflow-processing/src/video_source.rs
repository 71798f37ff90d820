//! First-frame extraction from video files via an ffmpeg subprocess.
//!
//! The browser-side original forces the decoder to materialize the first
//! frame by starting playback and immediately seeking back to zero. The
//! native equivalent is a one-frame ffmpeg extraction at timestamp 0, with
//! the whole decode step bounded by the shared timeout.

use std::process::Stdio;

use image::DynamicImage;
use tempfile::Builder;
use tokio::process::Command;
use tracing::debug;

use mediaflow_core::config::MEDIA_STEP_TIMEOUT_MS;
use mediaflow_core::{MediaFile, PipelineError, ThumbnailResult};

use crate::thumbnail::encode_thumbnail;
use crate::timeout::{bounded, timeout_as_extraction};

/// Extracts the first frame of a video through ffmpeg.
pub struct FrameExtractor {
    ffmpeg_path: String,
}

impl FrameExtractor {
    pub fn new(ffmpeg_path: impl Into<String>) -> Result<Self, PipelineError> {
        let ffmpeg_path = ffmpeg_path.into();
        let dangerous_chars = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];
        if ffmpeg_path.chars().any(|c| dangerous_chars.contains(&c)) {
            return Err(PipelineError::Transport {
                operation: "FrameExtractor setup".to_string(),
                message: "ffmpeg path contains dangerous characters".to_string(),
            });
        }
        Ok(Self { ffmpeg_path })
    }

    /// Decode the first frame of `file` into a raster image. Temp files are
    /// dropped on every exit path.
    pub async fn first_frame(&self, file: &MediaFile) -> Result<DynamicImage, PipelineError> {
        bounded("Video decode", MEDIA_STEP_TIMEOUT_MS, self.run_ffmpeg(file))
            .await
            .map_err(|e| timeout_as_extraction(&file.name, e))?
    }

    async fn run_ffmpeg(&self, file: &MediaFile) -> Result<DynamicImage, PipelineError> {
        let extraction = |reason: String| PipelineError::Extraction {
            name: file.name.clone(),
            reason,
        };

        let input = Builder::new()
            .prefix("mediaflow-in-")
            .tempfile()
            .map_err(|e| extraction(format!("temp file: {}", e)))?;
        tokio::fs::write(input.path(), &file.data)
            .await
            .map_err(|e| extraction(format!("temp file write: {}", e)))?;

        // The suffix tells ffmpeg which frame encoder to use.
        let output = Builder::new()
            .prefix("mediaflow-frame-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| extraction(format!("temp file: {}", e)))?;

        let result = Command::new(&self.ffmpeg_path)
            .arg("-ss")
            .arg("0")
            .arg("-i")
            .arg(input.path())
            .arg("-vframes")
            .arg("1")
            .arg("-y")
            .arg(output.path())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| extraction(format!("failed to execute ffmpeg: {}", e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(extraction(format!("ffmpeg failed: {}", stderr)));
        }

        let frame_bytes = tokio::fs::read(output.path())
            .await
            .map_err(|e| extraction(format!("frame read: {}", e)))?;
        if frame_bytes.is_empty() {
            return Err(extraction("ffmpeg produced no frame".to_string()));
        }

        debug!(file = %file.name, frame_bytes = frame_bytes.len(), "extracted first frame");
        image::load_from_memory(&frame_bytes).map_err(|e| extraction(format!("frame decode: {}", e)))
    }

    /// Extract a thumbnail from a video file: first frame, then the shared
    /// resize/encode step.
    pub async fn thumbnail_from_video(
        &self,
        file: &MediaFile,
    ) -> Result<ThumbnailResult, PipelineError> {
        let frame = self.first_frame(file).await?;
        encode_thumbnail(&file.name, frame).await
    }
}
