//! Upload URL broker: one request per batch, one destination pair per file.

use reqwest::Client;
use tracing::debug;

use mediaflow_core::config::THUMBNAIL_EXT;
use mediaflow_core::{MediaFile, PipelineError, UploadDestination, UploadUrlRequest};

use crate::transport_error;

/// Request presigned destination pairs for every file in the batch, in input
/// order. A non-success status fails the whole batch with a broker error;
/// the response body is decoded structurally and not validated further.
pub async fn request_upload_urls(
    http: &Client,
    endpoint: &str,
    files: &[MediaFile],
) -> Result<Vec<UploadDestination>, PipelineError> {
    let body = UploadUrlRequest {
        thumbnail_extension: THUMBNAIL_EXT.to_string(),
        filenames: files.iter().map(|f| f.name.clone()).collect(),
    };

    let resp = http
        .post(endpoint)
        .json(&body)
        .send()
        .await
        .map_err(|e| transport_error("Upload URL request", e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(PipelineError::Broker {
            status: status.as_u16(),
        });
    }

    let destinations: Vec<UploadDestination> = resp
        .json()
        .await
        .map_err(|e| transport_error("Upload URL response decode", e))?;

    debug!(count = destinations.len(), "received upload destinations");
    Ok(destinations)
}
