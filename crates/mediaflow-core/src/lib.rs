//! Mediaflow Core Library
//!
//! This crate provides the domain models, error taxonomy, configuration, and
//! port traits shared across all Mediaflow components: the media file and
//! thumbnail types, the upload/commit wire types, and the traits through
//! which the pipeline talks to the UI layer (notifications, content swap)
//! and to persistent client-side storage.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;

// Re-export commonly used types
pub use config::{ClientConfig, UploadEndpoints};
pub use error::{PipelineError, UploadAsset};
pub use models::{CommitBatch, CommitItem, MediaFile, MediaType, ThumbnailResult, UploadDestination, UploadUrlRequest};
pub use ports::{ContentSink, Notifier, NoticeVariant, StoragePort};
