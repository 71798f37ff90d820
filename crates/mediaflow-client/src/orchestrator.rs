//! Batch orchestrator: N files through extraction → brokering → dual
//! upload → all-or-nothing commit.

use std::sync::Arc;

use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use mediaflow_core::{
    CommitBatch, CommitItem, ContentSink, MediaFile, Notifier, NoticeVariant, PipelineError,
    ThumbnailResult, UploadEndpoints,
};
use mediaflow_processing::ThumbnailExtract;

use crate::broker::request_upload_urls;
use crate::transport_error;
use crate::uploader::upload_pair;

/// Drives one submission end to end.
///
/// Owns the per-submission working state for the lifetime of one `submit`
/// call; nothing is shared across submissions. Failures surface through the
/// injected [`Notifier`]; the committed HTML fragment goes to the injected
/// [`ContentSink`].
pub struct BatchOrchestrator {
    http: Client,
    endpoints: UploadEndpoints,
    extractor: Arc<dyn ThumbnailExtract>,
    notifier: Arc<dyn Notifier>,
    sink: Arc<dyn ContentSink>,
}

impl BatchOrchestrator {
    pub fn new(
        endpoints: UploadEndpoints,
        extractor: Arc<dyn ThumbnailExtract>,
        notifier: Arc<dyn Notifier>,
        sink: Arc<dyn ContentSink>,
    ) -> Self {
        Self {
            http: Client::new(),
            endpoints,
            extractor,
            notifier,
            sink,
        }
    }

    /// Replace the default HTTP client (shared connection pool, test hooks).
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Submit one batch. All failure handling is internal: per-file failures
    /// become notifications and suppress the commit, batch-wide failures
    /// abort early. The progress indicator is cleared on every exit path.
    pub async fn submit(&self, files: Vec<MediaFile>, entry_id: i64) {
        if files.is_empty() {
            return;
        }
        self.notifier.progress(true);
        self.run(files, entry_id).await;
        self.notifier.progress(false);
    }

    async fn run(&self, files: Vec<MediaFile>, entry_id: i64) {
        info!(count = files.len(), entry_id, "submitting media batch");

        // Fan out extraction first so it overlaps broker latency.
        let extraction_tasks: Vec<JoinHandle<Result<ThumbnailResult, PipelineError>>> = files
            .iter()
            .map(|file| {
                let extractor = Arc::clone(&self.extractor);
                let file = file.clone();
                tokio::spawn(async move { extractor.extract(&file).await })
            })
            .collect();

        let destinations = match request_upload_urls(
            &self.http,
            &self.endpoints.get_upload_url,
            &files,
        )
        .await
        {
            Ok(destinations) => destinations,
            Err(err) => {
                warn!(error = %err, "upload URL request failed, aborting batch");
                self.notify_error(&err);
                return;
            }
        };

        // Pairing with destinations is positional; each task writes only its
        // own slot.
        let mut commit_slots: Vec<Option<CommitItem>> = vec![None; destinations.len()];
        let mut has_error = false;

        let upload_tasks: Vec<JoinHandle<(usize, Result<CommitItem, PipelineError>)>> = files
            .into_iter()
            .zip(extraction_tasks)
            .zip(destinations)
            .enumerate()
            .map(|(index, ((file, thumbnail_task), destination))| {
                let http = self.http.clone();
                tokio::spawn(async move {
                    let media_type = file.media_type();
                    let outcome = upload_pair(&http, &file, thumbnail_task, &destination)
                        .await
                        .map(|thumbnail| CommitItem {
                            media_type,
                            file_id_original: destination.file_id_original,
                            width_original: thumbnail.width_original,
                            height_original: thumbnail.height_original,
                            file_id_thumbnail: destination.file_id_thumbnail,
                            width_thumbnail: thumbnail.width_thumbnail,
                            height_thumbnail: thumbnail.height_thumbnail,
                        });
                    (index, outcome)
                })
            })
            .collect();

        for task in upload_tasks {
            match task.await {
                Ok((index, Ok(item))) => {
                    if let Some(slot) = commit_slots.get_mut(index) {
                        *slot = Some(item);
                    }
                }
                Ok((index, Err(err))) => {
                    warn!(index, error = %err, "file upload failed");
                    self.notify_error(&err);
                    has_error = true;
                }
                Err(err) => {
                    warn!(error = %err, "upload task failed");
                    self.notifier.notify(
                        NoticeVariant::Error,
                        "Failed to upload file",
                        Some(&err.to_string()),
                    );
                    has_error = true;
                }
            }
        }

        // All-or-nothing: any failed file suppresses the commit. Files that
        // did upload are abandoned in storage.
        if has_error {
            debug!("batch had failures, skipping commit");
            return;
        }

        let batch = CommitBatch {
            entry_id,
            items: commit_slots.into_iter().flatten().collect(),
        };
        if let Err(err) = self.commit(&batch).await {
            warn!(error = %err, "commit failed");
            self.notify_error(&err);
        }
    }

    async fn commit(&self, batch: &CommitBatch) -> Result<(), PipelineError> {
        let resp = self
            .http
            .post(&self.endpoints.commit_upload_url)
            .json(batch)
            .send()
            .await
            .map_err(|e| transport_error("Commit request", e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PipelineError::Commit {
                status: status.as_u16(),
            });
        }

        let html = resp
            .text()
            .await
            .map_err(|e| transport_error("Commit response read", e))?;
        info!(items = batch.items.len(), "batch committed");
        self.sink.swap(&html);
        Ok(())
    }

    fn notify_error(&self, err: &PipelineError) {
        self.notifier
            .notify(NoticeVariant::Error, &err.user_message(), Some(&err.to_string()));
    }
}
