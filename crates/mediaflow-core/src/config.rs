//! Configuration module
//!
//! Thumbnail constants shared by the extractor and the upload client, plus
//! the environment-driven client configuration used by binaries.

use std::env;

use crate::error::PipelineError;

/// Fixed thumbnail width in pixels. Height is derived from the aspect ratio.
pub const THUMBNAIL_WIDTH: u32 = 640;
/// JPEG encoder quality (0-100). Matches the canonical 0.8 encoder setting.
pub const THUMBNAIL_QUALITY: u8 = 80;
pub const THUMBNAIL_EXT: &str = ".jpeg";
pub const THUMBNAIL_MIME_TYPE: &str = "image/jpeg";

/// Upper bound for every decode/encode suspension point, in milliseconds.
pub const MEDIA_STEP_TIMEOUT_MS: u64 = 5000;

/// Server endpoints consumed by one submission.
#[derive(Clone, Debug)]
pub struct UploadEndpoints {
    /// POST endpoint issuing presigned destination pairs for a batch.
    pub get_upload_url: String,
    /// POST endpoint persisting the batch metadata, returns an HTML fragment.
    pub commit_upload_url: String,
}

/// Client configuration for binaries, read from MEDIAFLOW_* env vars.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub endpoints: UploadEndpoints,
    pub ffmpeg_path: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, PipelineError> {
        let get_upload_url = require_env("MEDIAFLOW_GET_UPLOAD_URL")?;
        let commit_upload_url = require_env("MEDIAFLOW_COMMIT_UPLOAD_URL")?;
        let ffmpeg_path =
            env::var("MEDIAFLOW_FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string());

        Ok(Self {
            endpoints: UploadEndpoints {
                get_upload_url,
                commit_upload_url,
            },
            ffmpeg_path,
        })
    }
}

fn require_env(name: &str) -> Result<String, PipelineError> {
    env::var(name).map_err(|_| PipelineError::Transport {
        operation: "Configuration".to_string(),
        message: format!("{} is not set", name),
    })
}
