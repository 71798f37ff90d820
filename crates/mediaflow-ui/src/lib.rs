//! UI layer for Mediaflow.
//!
//! Host pages are server-rendered; behavior is bound to them declaratively.
//! This crate provides the three abstractions that layer needs:
//!
//! - a behavior registry: [`UiBehavior`] implementations are attached to
//!   elements carrying a matching `data-controller` attribute, with required
//!   child elements and typed configuration attributes validated up front by
//!   a declared [`BehaviorSchema`];
//! - a typed event bus ([`EventBus`]) carrying [`UiEvent`] payloads, which
//!   also implements the pipeline's `Notifier`/`ContentSink` ports;
//! - an explicit theme context with persistence behind an injected
//!   `StoragePort`.

pub mod behavior;
pub mod element;
pub mod events;
pub mod schema;
pub mod theme;

pub use behavior::{BehaviorRegistry, UiBehavior};
pub use element::Element;
pub use events::{EventBus, UiEvent};
pub use schema::{BehaviorSchema, BindError, BoundElement, TargetSpec, ValueKind, ValueSpec};
pub use theme::{MemoryStorage, Theme, ThemeContext};
