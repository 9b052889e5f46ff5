//! Core types and constructors for Shell.

use casement_common::{ShellEvent, WindowId};
use tokio::sync::broadcast;

use crate::chrome::{ChromeMetrics, Screen};
use crate::interaction::{InteractionState, InteractionTable, WindowInteraction};
use crate::protocol::OutgoingCommand;
use crate::queue::CommandQueue;
use crate::registry::Registry;
use crate::render::{self, Frame};

/// Local view of a backend-owned desktop.
///
/// Pointer input and backend replies both mutate the registry here; the
/// commands they generate accumulate in the queue until the bridge takes
/// them on its next tick.
pub struct Shell {
    pub(super) registry: Registry,
    pub(super) queue: CommandQueue,
    pub(super) interactions: InteractionTable,
    pub(super) chrome: ChromeMetrics,
    pub(super) screen: Screen,
}

impl Shell {
    /// Create a shell with default chrome metrics and screen size.
    pub fn new() -> Self {
        Self::with_chrome(ChromeMetrics::default(), Screen::default())
    }

    pub fn with_chrome(chrome: ChromeMetrics, screen: Screen) -> Self {
        Self {
            registry: Registry::new(),
            queue: CommandQueue::new(),
            interactions: InteractionTable::new(),
            chrome,
            screen,
        }
    }

    /// Queue the handshake that opens a session with the backend.
    pub fn boot(&mut self) {
        self.queue.push(OutgoingCommand::BrowserStart);
    }

    /// Discard all local state and start a fresh session.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.interactions.clear();
        self.queue.clear();
        self.boot();
    }

    /// Take the pending batch, leaving an empty queue for new commands.
    pub fn take_batch(&mut self) -> Vec<OutgoingCommand> {
        self.queue.take()
    }

    pub fn set_coalescing(&mut self, coalesce_maps: bool) {
        self.queue.set_coalescing(coalesce_maps);
    }

    pub fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    // -- Accessors --

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn queue(&self) -> &CommandQueue {
        &self.queue
    }

    pub fn chrome(&self) -> &ChromeMetrics {
        &self.chrome
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn interaction(&self, id: &WindowId) -> Option<&WindowInteraction> {
        self.interactions.get(id)
    }

    pub fn is_fullscreen(&self, id: &WindowId) -> bool {
        self.interactions.is_fullscreen(id)
    }

    pub fn active_interaction(&self) -> Option<(&WindowId, InteractionState)> {
        self.interactions.active()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.registry.subscribe()
    }

    /// Project the registry into drawable frames, bottom to top.
    pub fn frames(&self) -> Vec<Frame> {
        let dragging = match self.interactions.active() {
            Some((id, InteractionState::Moving { .. })) => Some(id),
            _ => None,
        };
        render::project(&self.registry, &self.chrome, dragging)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
