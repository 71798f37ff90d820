//! Media file and thumbnail models.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Media classification used for commit metadata.
///
/// Classification is by MIME prefix only: a `video/` prefix is a video,
/// anything else is treated as an image. Upstream file-picker constraints
/// are expected to keep other types out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn from_mime(content_type: &str) -> Self {
        if content_type.starts_with("video/") {
            MediaType::Video
        } else {
            MediaType::Image
        }
    }
}

/// A user-supplied media file: opaque bytes, declared MIME type, display name.
///
/// Immutable for the duration of one submission. `data` is `Bytes`, so clones
/// are cheap and per-file pipeline tasks can own their copy.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    pub fn media_type(&self) -> MediaType {
        MediaType::from_mime(&self.content_type)
    }
}

/// Derived thumbnail artifact of one media file.
///
/// Created once by the extractor, consumed by the uploader, never mutated.
/// `width_thumbnail` is always the fixed thumbnail width; `height_thumbnail`
/// preserves the original aspect ratio within integer rounding.
#[derive(Debug, Clone)]
pub struct ThumbnailResult {
    /// JPEG-encoded thumbnail bytes.
    pub data: Bytes,
    pub width_original: u32,
    pub height_original: u32,
    pub width_thumbnail: u32,
    pub height_thumbnail: u32,
}
