//! Pointer routing: press, drag and release.

use casement_common::{Bounds, Point, WindowId};
use tracing::debug;

use crate::interaction::{geometry, InteractionState, ResizeDirection};
use crate::protocol::OutgoingCommand;
use crate::render::{hit_test, Region};

use super::Shell;

impl Shell {
    /// Route a pointer press through the current projection. Returns the
    /// window and region that received it.
    pub fn pointer_down(&mut self, pointer: Point) -> Option<(WindowId, Region)> {
        let (id, region) = hit_test(&self.frames(), pointer)?;
        self.press(&id, region, pointer);
        Some((id, region))
    }

    /// Handle a press on a known region of a window frame.
    pub fn press(&mut self, id: &WindowId, region: Region, pointer: Point) {
        debug!(window = %id, ?region, x = pointer.x, y = pointer.y, "pointer down");
        match region {
            Region::Close => {
                self.close(id);
            }
            Region::Maximize => {
                self.toggle_maximize(id);
            }
            Region::TitleBar => {
                self.begin_move(id, pointer);
            }
            Region::Handle(direction) => {
                self.begin_resize(id, direction, pointer);
            }
            Region::Body => self.focus(id),
        }
    }

    /// Start a title-bar drag. A maximized window is restored first so the
    /// offset is captured against its pre-maximize bounds.
    pub fn begin_move(&mut self, id: &WindowId, pointer: Point) -> bool {
        let Some(bounds) = self.bounds_for_gesture(id) else {
            return false;
        };
        let offset = bounds.origin() - pointer;
        self.interactions
            .begin(id, InteractionState::Moving { offset });
        self.focus(id);
        true
    }

    /// Start a handle drag. A maximized window is restored first so the
    /// snapshot holds its pre-maximize bounds.
    pub fn begin_resize(&mut self, id: &WindowId, direction: ResizeDirection, pointer: Point) -> bool {
        let Some(snapshot) = self.bounds_for_gesture(id) else {
            return false;
        };
        self.interactions.begin(
            id,
            InteractionState::Resizing {
                direction,
                start: pointer,
                snapshot,
            },
        );
        true
    }

    /// Process-wide pointer-move listener, keyed by the active gesture.
    /// Every tick queues a `window_map`; only drags also refocus.
    pub fn pointer_move(&mut self, pointer: Point) {
        let Some((id, state)) = self.interactions.active() else {
            return;
        };
        let id = id.clone();
        let Some(current) = self.registry.get(&id).map(|w| w.bounds) else {
            return;
        };

        match state {
            InteractionState::Idle => {}
            InteractionState::Moving { offset } => {
                let origin = geometry::moved_origin(pointer, offset, &self.chrome);
                let bounds = Bounds::new(origin.x, origin.y, current.width, current.height);
                self.apply_local_bounds(&id, bounds);
                self.focus(&id);
            }
            InteractionState::Resizing {
                direction,
                start,
                snapshot,
            } => {
                let bounds = geometry::resized(snapshot, direction, pointer - start, &self.chrome);
                self.apply_local_bounds(&id, bounds);
            }
        }
    }

    /// Process-wide pointer-up listener. Ending a move or resize focuses
    /// the window it drove.
    pub fn pointer_up(&mut self) {
        if let Some((id, state)) = self.interactions.end() {
            if state.is_active() {
                self.focus(&id);
            }
        }
    }

    /// Current bounds of a visible window about to start a gesture, after
    /// leaving fullscreen if needed.
    fn bounds_for_gesture(&mut self, id: &WindowId) -> Option<Bounds> {
        let window = self.registry.get(id)?;
        if !window.visible {
            return None;
        }
        if let Some(old) = self.interactions.take_maximized(id) {
            debug!(window = %id, "leaving fullscreen for gesture");
            self.apply_local_bounds(id, old);
            return Some(old);
        }
        self.registry.get(id).map(|w| w.bounds)
    }

    /// Optimistic local geometry change, mirrored to the backend.
    pub(super) fn apply_local_bounds(&mut self, id: &WindowId, bounds: Bounds) {
        self.registry.set_bounds(id, bounds);
        self.queue.push(OutgoingCommand::map(id, bounds));
    }
}
