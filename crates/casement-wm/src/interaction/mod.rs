//! Pointer interaction state machine.
//!
//! One tagged state per window id, plus the single process-wide active
//! gesture: there is one pointer, so at most one window is moving or
//! resizing at a time.

pub mod geometry;
mod types;

pub use types::*;

use std::collections::HashMap;

use casement_common::{Bounds, WindowId};

#[derive(Debug, Default)]
pub struct InteractionTable {
    windows: HashMap<WindowId, WindowInteraction>,
    active: Option<WindowId>,
}

impl InteractionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowInteraction> {
        self.windows.get(id)
    }

    pub fn state(&self, id: &WindowId) -> InteractionState {
        self.windows
            .get(id)
            .map(|w| w.state)
            .unwrap_or_default()
    }

    pub fn is_fullscreen(&self, id: &WindowId) -> bool {
        self.windows.get(id).is_some_and(|w| w.is_fullscreen())
    }

    /// The window driven by the current gesture and its state.
    pub fn active(&self) -> Option<(&WindowId, InteractionState)> {
        let id = self.active.as_ref()?;
        Some((id, self.state(id)))
    }

    /// Start a gesture on `id`, silently idling any previous one.
    pub fn begin(&mut self, id: &WindowId, state: InteractionState) {
        if let Some(previous) = self.active.take() {
            if let Some(w) = self.windows.get_mut(&previous) {
                w.state = InteractionState::Idle;
            }
        }
        self.windows.entry(id.clone()).or_default().state = state;
        self.active = Some(id.clone());
    }

    /// End the current gesture, returning the window and the state it left.
    pub fn end(&mut self) -> Option<(WindowId, InteractionState)> {
        let id = self.active.take()?;
        let previous = self
            .windows
            .get_mut(&id)
            .map(|w| std::mem::take(&mut w.state))
            .unwrap_or_default();
        Some((id, previous))
    }

    /// Record pre-maximize bounds. Returns `false` if already maximized,
    /// in which case the original snapshot is kept.
    pub fn mark_maximized(&mut self, id: &WindowId, old: Bounds) -> bool {
        let entry = self.windows.entry(id.clone()).or_default();
        if entry.maximized_from.is_some() {
            return false;
        }
        entry.maximized_from = Some(old);
        true
    }

    /// Clear the fullscreen flag, returning the bounds to restore.
    pub fn take_maximized(&mut self, id: &WindowId) -> Option<Bounds> {
        self.windows.get_mut(id)?.maximized_from.take()
    }

    /// Drop all interaction state for one window.
    pub fn forget(&mut self, id: &WindowId) {
        self.windows.remove(id);
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
    }

    pub fn clear(&mut self) {
        self.windows.clear();
        self.active = None;
    }
}
