//! Mediaflow CLI — direct-to-storage media upload client.
//!
//! Set MEDIAFLOW_GET_UPLOAD_URL and MEDIAFLOW_COMMIT_UPLOAD_URL to the
//! server endpoints; MEDIAFLOW_FFMPEG_PATH overrides the ffmpeg binary used
//! for video thumbnails (default: `ffmpeg` on PATH).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use bytes::Bytes;
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use mediaflow_cli::{content_type_for, init_tracing};
use mediaflow_client::BatchOrchestrator;
use mediaflow_core::{ClientConfig, ContentSink, MediaFile, Notifier, NoticeVariant};
use mediaflow_processing::ThumbnailExtractor;
use mediaflow_ui::{EventBus, UiEvent};

#[derive(Parser)]
#[command(name = "mediaflow", about = "Direct-to-storage media upload client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload media files and commit them to a parent entry
    Upload {
        /// Files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Parent entry id the batch commits to
        #[arg(long)]
        entry_id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Upload { files, entry_id } => upload(files, entry_id).await,
    }
}

async fn upload(paths: Vec<PathBuf>, entry_id: i64) -> anyhow::Result<()> {
    let config = ClientConfig::from_env().context("Missing MEDIAFLOW_* configuration")?;

    let mut files = Vec::with_capacity(paths.len());
    for path in &paths {
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();
        let content_type = content_type_for(&name);
        files.push(MediaFile::new(name, content_type, Bytes::from(data)));
    }

    let bus = EventBus::default();
    let mut rx = bus.subscribe();
    let printer = tokio::spawn(async move {
        while let Ok(event) = rx.recv().await {
            match event {
                UiEvent::Toast {
                    variant,
                    message,
                    detail,
                } => match variant {
                    NoticeVariant::Error => warn!(detail = detail.as_deref(), "{}", message),
                    _ => info!("{}", message),
                },
                UiEvent::Progress { active } => debug!(active, "submission progress"),
                UiEvent::ContentSwapped { html } => println!("{}", html),
                UiEvent::ThemeChanged { .. } => {}
            }
        }
    });

    let extractor = Arc::new(ThumbnailExtractor::new(config.ffmpeg_path.clone())?);
    let notifier: Arc<dyn Notifier> = Arc::new(bus.clone());
    let sink: Arc<dyn ContentSink> = Arc::new(bus);
    let orchestrator = BatchOrchestrator::new(config.endpoints, extractor, notifier, sink);

    orchestrator.submit(files, entry_id).await;

    // Dropping the orchestrator drops the last bus handles, which ends the
    // printer task.
    drop(orchestrator);
    let _ = printer.await;
    Ok(())
}
