//! Window operations: focus, close, maximize/restore, and the launcher.

use casement_common::WindowId;
use tracing::{debug, info};

use crate::protocol::OutgoingCommand;

use super::Shell;

impl Shell {
    /// Raise a window and tell the backend. The full order is sent along
    /// whenever it actually changed.
    pub fn focus(&mut self, id: &WindowId) {
        if !self.registry.contains(id) {
            return;
        }
        let reordered = self.registry.raise(id);
        self.queue.push(OutgoingCommand::WindowFocus { window: id.clone() });
        if reordered {
            self.queue.push(OutgoingCommand::WindowReorder {
                windows: self.registry.stacking().ids().to_vec(),
            });
        }
    }

    /// Ask the backend to close a window and hide its frame immediately.
    pub fn close(&mut self, id: &WindowId) -> bool {
        if !self.registry.contains(id) {
            return false;
        }
        self.queue.push(OutgoingCommand::WindowClose { window: id.clone() });
        self.registry.hide(id);
        self.interactions.forget(id);
        debug!(window = %id, "closed");
        true
    }

    /// Fill the screen, remembering the current bounds for restore.
    pub fn maximize(&mut self, id: &WindowId) -> bool {
        let Some(current) = self.registry.get(id).map(|w| w.bounds) else {
            return false;
        };
        self.interactions.mark_maximized(id, current);
        let bounds = self.chrome.maximized(self.screen);
        self.apply_local_bounds(id, bounds);
        true
    }

    /// Return a maximized window to its pre-maximize bounds.
    pub fn restore(&mut self, id: &WindowId) -> bool {
        if !self.registry.contains(id) {
            return false;
        }
        match self.interactions.take_maximized(id) {
            Some(old) => {
                self.apply_local_bounds(id, old);
                true
            }
            None => false,
        }
    }

    /// Title-bar maximize button.
    pub fn toggle_maximize(&mut self, id: &WindowId) -> bool {
        if self.interactions.is_fullscreen(id) {
            self.restore(id)
        } else {
            self.maximize(id)
        }
    }

    /// Launch a program from a launcher command line. Blank input is ignored.
    pub fn run_program(&mut self, input: &str) -> bool {
        let command: Vec<String> = input.split_whitespace().map(str::to_string).collect();
        if command.is_empty() {
            return false;
        }
        info!(?command, "run program");
        self.queue.push(OutgoingCommand::RunProgram { command });
        true
    }
}
