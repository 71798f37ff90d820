//! Upload client for Mediaflow.
//!
//! Three pieces, matching the submission pipeline: the broker requests
//! presigned destination pairs for a batch, the dual-target uploader pushes
//! one file's original and thumbnail to storage with the original going out
//! first, and the batch orchestrator drives N files through
//! extraction → brokering → upload → all-or-nothing commit.

pub mod broker;
pub mod orchestrator;
pub mod uploader;

pub use broker::request_upload_urls;
pub use orchestrator::BatchOrchestrator;
pub use uploader::upload_pair;

use mediaflow_core::PipelineError;

pub(crate) fn transport_error(operation: &str, err: reqwest::Error) -> PipelineError {
    PipelineError::Transport {
        operation: operation.to_string(),
        message: err.to_string(),
    }
}
