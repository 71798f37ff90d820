//! Domain models shared across Mediaflow crates.

pub mod media;
pub mod upload;

pub use media::{MediaFile, MediaType, ThumbnailResult};
pub use upload::{CommitBatch, CommitItem, UploadDestination, UploadUrlRequest};
