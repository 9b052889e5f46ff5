//! Outgoing command batch, flushed once per bridge tick.

use crate::protocol::OutgoingCommand;

/// Commands generated since the last flush, in generation order.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: Vec<OutgoingCommand>,
    /// Drop an earlier queued `window_map` for the same window on push.
    coalesce_maps: bool,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coalescing(coalesce_maps: bool) -> Self {
        Self {
            pending: Vec::new(),
            coalesce_maps,
        }
    }

    pub fn set_coalescing(&mut self, coalesce_maps: bool) {
        self.coalesce_maps = coalesce_maps;
    }

    pub fn push(&mut self, command: OutgoingCommand) {
        if self.coalesce_maps {
            if let OutgoingCommand::WindowMap { window, .. } = &command {
                self.pending.retain(|queued| {
                    !matches!(queued, OutgoingCommand::WindowMap { window: w, .. } if w == window)
                });
            }
        }
        self.pending.push(command);
    }

    /// Swap the pending batch for an empty one and return it.
    pub fn take(&mut self) -> Vec<OutgoingCommand> {
        std::mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn as_slice(&self) -> &[OutgoingCommand] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casement_common::{Bounds, WindowId};

    fn map(id: &str, x: i32) -> OutgoingCommand {
        OutgoingCommand::map(&WindowId::from(id), Bounds::new(x, 100, 300, 200))
    }

    #[test]
    fn push_keeps_generation_order() {
        let mut queue = CommandQueue::new();
        queue.push(map("a", 1));
        queue.push(OutgoingCommand::WindowFocus {
            window: WindowId::from("a"),
        });
        queue.push(map("a", 2));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.as_slice()[0], map("a", 1));
        assert_eq!(queue.as_slice()[2], map("a", 2));
    }

    #[test]
    fn take_swaps_for_empty_queue() {
        let mut queue = CommandQueue::new();
        queue.push(map("a", 1));
        let batch = queue.take();
        assert_eq!(batch, vec![map("a", 1)]);
        assert!(queue.is_empty());

        queue.push(map("a", 2));
        assert_eq!(queue.take(), vec![map("a", 2)]);
        assert!(queue.take().is_empty());
    }

    #[test]
    fn unbatched_by_default() {
        let mut queue = CommandQueue::new();
        for x in 0..5 {
            queue.push(map("a", x));
        }
        assert_eq!(queue.len(), 5);
    }

    #[test]
    fn coalescing_keeps_latest_map_per_window() {
        let mut queue = CommandQueue::with_coalescing(true);
        queue.push(map("a", 1));
        queue.push(map("b", 1));
        queue.push(OutgoingCommand::WindowFocus {
            window: WindowId::from("a"),
        });
        queue.push(map("a", 2));
        assert_eq!(
            queue.take(),
            vec![
                map("b", 1),
                OutgoingCommand::WindowFocus {
                    window: WindowId::from("a")
                },
                map("a", 2),
            ]
        );
    }

    #[test]
    fn clear_drops_everything() {
        let mut queue = CommandQueue::new();
        queue.push(OutgoingCommand::BrowserStart);
        queue.clear();
        assert!(queue.is_empty());
    }
}
