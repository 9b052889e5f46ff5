//! Reply reconciler: applies backend segments to the registry.

use casement_common::Point;
use tracing::{debug, info};

use crate::protocol::{IncomingSegment, OutgoingCommand, WindowMapSegment, WindowType};
use crate::registry::WindowData;

use super::Shell;

/// Result of applying one reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Number of segments applied.
    Applied(usize),
    /// The backend requested a reload; local state was reset and the rest
    /// of the reply discarded.
    Reloaded,
}

impl Shell {
    /// Apply a reply's segments in array order.
    pub fn apply_segments(
        &mut self,
        segments: impl IntoIterator<Item = IncomingSegment>,
    ) -> ReconcileOutcome {
        let mut applied = 0;
        for segment in segments {
            if segment == IncomingSegment::Reload {
                info!("backend requested reload, discarding local state");
                self.reset();
                return ReconcileOutcome::Reloaded;
            }
            self.apply_segment(segment);
            applied += 1;
        }
        ReconcileOutcome::Applied(applied)
    }

    pub fn apply_segment(&mut self, segment: IncomingSegment) {
        match segment {
            IncomingSegment::WindowMap(map) => self.reconcile_map(map),
            IncomingSegment::WindowFocus { window } => {
                debug!(window = %window, "backend focus");
                self.registry.raise(&window);
            }
            IncomingSegment::WindowIcon { window, image } => {
                if !self.registry.set_icon(&window, image) {
                    debug!(window = %window, "icon for unknown window ignored");
                }
            }
            IncomingSegment::Reload => self.reset(),
            IncomingSegment::Unknown => debug!("ignoring unrecognized segment"),
        }
    }

    fn reconcile_map(&mut self, map: WindowMapSegment) {
        if map.win_t != WindowType::Normal {
            debug!(window = %map.window, "skipping non-normal window");
            return;
        }

        if self.registry.contains(&map.window) {
            let bounds = map.bounds();
            self.registry.update(&map.window, |w| {
                w.name = map.name.clone();
                w.visible = map.visible;
                w.bounds = bounds;
            });
        } else {
            self.map_new_window(&map);
        }

        if !map.has_border {
            self.queue.push(self.chrome.border_registration(&map.window));
        }
    }

    /// First sighting of a window. Windows the backend left at the origin
    /// are moved to the placement anchor and the backend told about it.
    fn map_new_window(&mut self, map: &WindowMapSegment) {
        let mut bounds = map.bounds();
        if bounds.origin() == Point::new(0, 0) && map.visible {
            let anchor = self.chrome.anchor;
            bounds.x = anchor.x;
            bounds.y = anchor.y;
            self.queue.push(OutgoingCommand::map(&map.window, bounds));
        }

        info!(window = %map.window, name = %map.name, ?bounds, "window mapped");
        self.registry.insert(WindowData {
            id: map.window.clone(),
            name: map.name.clone(),
            visible: map.visible,
            bounds,
            icon: None,
        });
    }
}
