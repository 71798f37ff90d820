//! Port traits through which the pipeline reaches its host surface.
//!
//! The orchestrator never talks to a concrete UI. It raises notifications
//! and the final content swap through these traits; the UI crate provides an
//! event-bus implementation and binaries may provide their own.

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Info,
    Success,
    Error,
}

/// User-visible notification surface (toast analog) plus the submission
/// progress indicator.
pub trait Notifier: Send + Sync {
    /// Raise a transient notification. `detail` carries the underlying error
    /// text when one is available.
    fn notify(&self, variant: NoticeVariant, message: &str, detail: Option<&str>);

    /// Toggle the submission progress indicator. Implementations must treat
    /// this as idempotent; the orchestrator clears it on every exit path.
    fn progress(&self, active: bool);
}

/// Receiver of the server-rendered fragment that replaces the media
/// container after a successful commit.
pub trait ContentSink: Send + Sync {
    fn swap(&self, html: &str);
}

/// Key-value persistence port for UI preferences (localStorage analog).
pub trait StoragePort: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}
