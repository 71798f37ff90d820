//! Error types module
//!
//! All pipeline failures are unified under the `PipelineError` enum.
//! File-local variants (`Extraction`, `Upload`, `Timeout`) are caught at the
//! per-file boundary and turned into notifications; batch-wide variants
//! (`Broker`, `Commit`) abort the remaining stages of a submission. Nothing
//! in this subsystem is retried automatically.

use std::fmt;

/// Which half of a destination pair an upload failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadAsset {
    Original,
    Thumbnail,
}

impl fmt::Display for UploadAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadAsset::Original => write!(f, "original"),
            UploadAsset::Thumbnail => write!(f, "thumbnail"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Thumbnail extraction failed for {name}: {reason}")]
    Extraction { name: String, reason: String },

    #[error("{operation} timed out after {ms} ms")]
    Timeout { operation: String, ms: u64 },

    #[error("Upload URL request failed with status {status}")]
    Broker { status: u16 },

    #[error("Upload of {asset} for {name} failed with status {status}")]
    Upload {
        name: String,
        asset: UploadAsset,
        status: u16,
    },

    #[error("Commit request failed with status {status}")]
    Commit { status: u16 },

    #[error("Transport error during {operation}: {message}")]
    Transport { operation: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// Short user-facing message naming the failed operation (toast body).
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::Extraction { name, .. } => {
                format!("Failed to generate thumbnail for {}", name)
            }
            PipelineError::Timeout { operation, .. } => format!("{} timed out", operation),
            PipelineError::Broker { .. } => "Failed to request upload URLs".to_string(),
            PipelineError::Upload { name, .. } => format!("Failed to upload {}", name),
            PipelineError::Commit { .. } => "Failed to commit files".to_string(),
            PipelineError::Transport { operation, .. } => format!("{} failed", operation),
            PipelineError::Io(_) => "Failed to read file".to_string(),
        }
    }

    /// Whether this error aborts the whole submission rather than one file.
    pub fn is_batch_fatal(&self) -> bool {
        matches!(
            self,
            PipelineError::Broker { .. } | PipelineError::Commit { .. }
        )
    }

    /// The file name this error refers to, when it is file-scoped.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            PipelineError::Extraction { name, .. } | PipelineError::Upload { name, .. } => {
                Some(name)
            }
            _ => None,
        }
    }
}
