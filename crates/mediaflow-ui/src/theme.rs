//! Theme preference as an explicit context object.
//!
//! No global state: consumers hold a `ThemeContext`, persistence goes
//! through the injected `StoragePort`, and changes are announced on the
//! event bus when one is attached.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use mediaflow_core::StoragePort;

use crate::events::{EventBus, UiEvent};

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Current theme preference plus its persistence.
pub struct ThemeContext {
    storage: Arc<dyn StoragePort>,
    current: Mutex<Theme>,
    bus: Option<EventBus>,
}

impl ThemeContext {
    /// Load the persisted preference, defaulting to light when absent or
    /// unparseable.
    pub fn load(storage: Arc<dyn StoragePort>) -> Self {
        let current = storage
            .get(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or(Theme::Light);
        Self {
            storage,
            current: Mutex::new(current),
            bus: None,
        }
    }

    /// Announce theme changes on `bus`.
    pub fn with_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn current(&self) -> Theme {
        *self.current.lock().expect("theme lock poisoned")
    }

    pub fn set(&self, theme: Theme) {
        *self.current.lock().expect("theme lock poisoned") = theme;
        self.storage.set(THEME_KEY, theme.as_str());
        if let Some(bus) = &self.bus {
            bus.publish(UiEvent::ThemeChanged { theme });
        }
    }

    pub fn toggle(&self) -> Theme {
        let next = match self.current() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set(next);
        next
    }
}

/// In-memory `StoragePort` for tests and headless binaries.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().expect("storage lock poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .expect("storage lock poisoned")
            .insert(key.to_string(), value.to_string());
    }
}
