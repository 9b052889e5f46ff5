//! Registry change notifications.
//!
//! The window registry publishes one `ShellEvent` per mutation. Renderers
//! subscribe and re-project; they never hold window state themselves.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::WindowId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShellEvent {
    /// A window id was seen for the first time.
    WindowMapped(WindowId),
    /// Geometry, name, icon or visibility of a known window changed.
    WindowUpdated(WindowId),
    /// A window was closed locally (kept in the registry, hidden).
    WindowHidden(WindowId),
    StackingChanged,
    /// All local state was discarded.
    Reset,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<ShellEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ShellEvent) -> usize {
        tracing::trace!(?event, "registry event");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
