//! Media processing for Mediaflow: thumbnail extraction.
//!
//! Given a raw media file, produce a fixed-width JPEG thumbnail plus the
//! original and thumbnail dimensions, entirely locally. Images are decoded
//! with the `image` crate; videos have their first frame pulled out through
//! an ffmpeg subprocess. Every decode/encode suspension point is bounded by
//! the shared step timeout.

pub mod extractor;
pub mod image_source;
pub mod thumbnail;
pub mod timeout;
pub mod video_source;

pub use extractor::{ThumbnailExtract, ThumbnailExtractor};
pub use image_source::thumbnail_from_image;
pub use video_source::FrameExtractor;
