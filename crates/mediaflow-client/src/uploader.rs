//! Dual-target uploader: original and thumbnail for one file.
//!
//! The original upload does not depend on thumbnail generation, so it is
//! launched immediately; the thumbnail future is only awaited when its bytes
//! are needed for the second upload. Both uploads must complete before the
//! pair resolves.

use std::collections::HashMap;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use tokio::task::JoinHandle;
use tracing::debug;

use mediaflow_core::{
    MediaFile, PipelineError, ThumbnailResult, UploadAsset, UploadDestination,
};

/// Upload one file's original and thumbnail to its destination pair.
///
/// `thumbnail` is the file's previously-started extraction task. Failure of
/// either asset upload (or of extraction itself) fails the whole pair.
pub async fn upload_pair(
    http: &Client,
    file: &MediaFile,
    thumbnail: JoinHandle<Result<ThumbnailResult, PipelineError>>,
    destination: &UploadDestination,
) -> Result<ThumbnailResult, PipelineError> {
    // Kick off the original upload before touching the thumbnail future.
    let original_upload = tokio::spawn(upload_one(
        http.clone(),
        file.name.clone(),
        UploadAsset::Original,
        destination.upload_method.clone(),
        destination.upload_url_original.clone(),
        destination.upload_headers_original.clone(),
        file.data.clone(),
    ));

    let thumbnail_result = thumbnail.await.map_err(|e| PipelineError::Extraction {
        name: file.name.clone(),
        reason: format!("extraction task failed: {}", e),
    })??;

    upload_one(
        http.clone(),
        file.name.clone(),
        UploadAsset::Thumbnail,
        destination.upload_method.clone(),
        destination.upload_url_thumbnail.clone(),
        destination.upload_headers_thumbnail.clone(),
        thumbnail_result.data.clone(),
    )
    .await?;

    original_upload.await.map_err(|e| PipelineError::Transport {
        operation: "Original upload task".to_string(),
        message: e.to_string(),
    })??;

    debug!(file = %file.name, "uploaded original and thumbnail");
    Ok(thumbnail_result)
}

async fn upload_one(
    http: Client,
    name: String,
    asset: UploadAsset,
    method: String,
    url: String,
    headers: HashMap<String, String>,
    body: Bytes,
) -> Result<(), PipelineError> {
    let transport = |message: String| PipelineError::Transport {
        operation: format!("{} upload", asset),
        message,
    };

    let method = Method::from_bytes(method.to_uppercase().as_bytes())
        .map_err(|e| transport(format!("invalid method: {}", e)))?;

    let mut header_map = HeaderMap::new();
    for (key, value) in &headers {
        let header_name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| transport(format!("invalid header name {}: {}", key, e)))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| transport(format!("invalid header value for {}: {}", key, e)))?;
        header_map.insert(header_name, header_value);
    }

    let resp = http
        .request(method, &url)
        .headers(header_map)
        .body(body)
        .send()
        .await
        .map_err(|e| transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(PipelineError::Upload {
            name,
            asset,
            status: status.as_u16(),
        });
    }
    Ok(())
}
