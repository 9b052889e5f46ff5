//! Window registry: the canonical local mirror of backend window state.

use std::collections::HashMap;

use casement_common::{Bounds, EventBus, ShellEvent, WindowId};
use tokio::sync::broadcast;

use super::stacking::StackingOrder;

/// Local state of one backend window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowData {
    pub id: WindowId,
    pub name: String,
    pub visible: bool,
    /// Content area, excluding chrome.
    pub bounds: Bounds,
    /// Icon image reference (usually a data URL).
    pub icon: Option<String>,
}

/// Every window the backend has mapped, plus their stacking order.
///
/// Entries are never removed individually: closing hides a window and the
/// backend decides when it is really gone. All mutations publish a
/// [`ShellEvent`] so renderers can re-project.
pub struct Registry {
    windows: HashMap<WindowId, WindowData>,
    stacking: StackingOrder,
    events: EventBus,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            stacking: StackingOrder::new(),
            events: EventBus::default(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.events.subscribe()
    }

    // -- Accessors --

    pub fn get(&self, id: &WindowId) -> Option<&WindowData> {
        self.windows.get(id)
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.windows.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn windows(&self) -> impl Iterator<Item = &WindowData> {
        self.windows.values()
    }

    pub fn stacking(&self) -> &StackingOrder {
        &self.stacking
    }

    // -- Mutations --

    /// Add a window seen for the first time and stack it on top.
    /// An existing entry with the same id is replaced.
    pub fn insert(&mut self, window: WindowData) {
        let id = window.id.clone();
        let is_new = self.windows.insert(id.clone(), window).is_none();
        self.events.publish(if is_new {
            ShellEvent::WindowMapped(id.clone())
        } else {
            ShellEvent::WindowUpdated(id.clone())
        });
        if self.stacking.push_if_absent(&id) {
            self.events.publish(ShellEvent::StackingChanged);
        }
    }

    /// Apply `f` to a known window. Returns `false` for unknown ids.
    pub fn update(&mut self, id: &WindowId, f: impl FnOnce(&mut WindowData)) -> bool {
        let Some(window) = self.windows.get_mut(id) else {
            return false;
        };
        let before = window.clone();
        f(window);
        if *window != before {
            self.events.publish(ShellEvent::WindowUpdated(id.clone()));
        }
        true
    }

    pub fn set_bounds(&mut self, id: &WindowId, bounds: Bounds) -> bool {
        self.update(id, |w| w.bounds = bounds)
    }

    pub fn set_icon(&mut self, id: &WindowId, image: String) -> bool {
        self.update(id, |w| w.icon = Some(image))
    }

    /// Mark a window invisible. It stays registered and stacked.
    pub fn hide(&mut self, id: &WindowId) -> bool {
        let Some(window) = self.windows.get_mut(id) else {
            return false;
        };
        if window.visible {
            window.visible = false;
            self.events.publish(ShellEvent::WindowHidden(id.clone()));
        }
        true
    }

    /// Move a window to the top of the stack. Returns `true` if the order
    /// changed.
    pub fn raise(&mut self, id: &WindowId) -> bool {
        let changed = self.stacking.raise(id);
        if changed {
            self.events.publish(ShellEvent::StackingChanged);
        }
        changed
    }

    /// Discard every window and the stacking order.
    pub fn clear(&mut self) {
        self.windows.clear();
        self.stacking.clear();
        self.events.publish(ShellEvent::Reset);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
