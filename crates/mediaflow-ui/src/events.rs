//! Typed event bus for cross-component UI signaling.
//!
//! One broadcast channel of [`UiEvent`] values, scoped to the UI layer's
//! lifetime. The bus implements the pipeline's `Notifier` and `ContentSink`
//! ports, so the orchestrator's notifications and the committed fragment
//! arrive here as ordinary events.

use tokio::sync::broadcast;

use mediaflow_core::{ContentSink, Notifier, NoticeVariant};

use crate::theme::Theme;

/// Every cross-component signal in the UI layer, with its full payload.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Transient user-visible notification.
    Toast {
        variant: NoticeVariant,
        message: String,
        /// Underlying error text, when one is available.
        detail: Option<String>,
    },
    /// Submission progress indicator on/off.
    Progress { active: bool },
    /// Server-rendered fragment replacing the media container.
    ContentSwapped { html: String },
    /// Theme preference changed.
    ThemeChanged { theme: Theme },
}

/// Process-wide publish/subscribe channel for [`UiEvent`].
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<UiEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish to all current subscribers. Publishing with no subscribers is
    /// not an error; the event is simply dropped.
    pub fn publish(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

impl Notifier for EventBus {
    fn notify(&self, variant: NoticeVariant, message: &str, detail: Option<&str>) {
        self.publish(UiEvent::Toast {
            variant,
            message: message.to_string(),
            detail: detail.map(str::to_string),
        });
    }

    fn progress(&self, active: bool) {
        self.publish(UiEvent::Progress { active });
    }
}

impl ContentSink for EventBus {
    fn swap(&self, html: &str) {
        self.publish(UiEvent::ContentSwapped {
            html: html.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_events_to_all_subscribers() {
        let bus = EventBus::new(8);
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.publish(UiEvent::Progress { active: true });

        assert!(matches!(
            first.recv().await.unwrap(),
            UiEvent::Progress { active: true }
        ));
        assert!(matches!(
            second.recv().await.unwrap(),
            UiEvent::Progress { active: true }
        ));
    }

    #[tokio::test]
    async fn notifier_port_maps_to_toast_events() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();

        bus.notify(NoticeVariant::Error, "Failed to upload a.png", Some("403"));

        match rx.recv().await.unwrap() {
            UiEvent::Toast {
                variant,
                message,
                detail,
            } => {
                assert_eq!(variant, NoticeVariant::Error);
                assert_eq!(message, "Failed to upload a.png");
                assert_eq!(detail.as_deref(), Some("403"));
            }
            other => panic!("expected toast, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn content_sink_port_maps_to_swap_events() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();

        bus.swap("<div>fresh</div>");

        match rx.recv().await.unwrap() {
            UiEvent::ContentSwapped { html } => assert_eq!(html, "<div>fresh</div>"),
            other => panic!("expected swap, got {:?}", other),
        }
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new(8);
        bus.publish(UiEvent::Progress { active: false });
    }
}
