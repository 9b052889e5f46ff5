//! Bottom-to-top window stacking order.

use casement_common::WindowId;

/// Ordered window ids, bottom first. The last id is topmost and focused.
/// Each id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackingOrder {
    ids: Vec<WindowId>,
}

impl StackingOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `id` to the top (remove-then-append). Returns `true` if the
    /// order changed.
    pub fn raise(&mut self, id: &WindowId) -> bool {
        if self.topmost() == Some(id) {
            return false;
        }
        self.ids.retain(|existing| existing != id);
        self.ids.push(id.clone());
        true
    }

    /// Append `id` on top if it is not stacked yet. Returns `true` if added.
    pub fn push_if_absent(&mut self, id: &WindowId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.clone());
        true
    }

    pub fn position(&self, id: &WindowId) -> Option<usize> {
        self.ids.iter().position(|existing| existing == id)
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.ids.contains(id)
    }

    pub fn topmost(&self) -> Option<&WindowId> {
        self.ids.last()
    }

    pub fn ids(&self) -> &[WindowId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<WindowId> {
        names.iter().map(|n| WindowId::from(*n)).collect()
    }

    fn order(names: &[&str]) -> StackingOrder {
        let mut stack = StackingOrder::new();
        for id in ids(names) {
            stack.push_if_absent(&id);
        }
        stack
    }

    #[test]
    fn raise_moves_to_top() {
        let mut stack = order(&["a", "b", "c"]);
        assert!(stack.raise(&WindowId::from("a")));
        assert_eq!(stack.ids(), ids(&["b", "c", "a"]).as_slice());
        assert_eq!(stack.topmost(), Some(&WindowId::from("a")));
    }

    #[test]
    fn raise_topmost_is_noop() {
        let mut stack = order(&["a", "b"]);
        assert!(!stack.raise(&WindowId::from("b")));
        assert_eq!(stack.ids(), ids(&["a", "b"]).as_slice());
    }

    #[test]
    fn raise_unknown_appends() {
        let mut stack = order(&["a"]);
        assert!(stack.raise(&WindowId::from("z")));
        assert_eq!(stack.ids(), ids(&["a", "z"]).as_slice());
    }

    #[test]
    fn push_if_absent_never_duplicates() {
        let mut stack = order(&["a", "b"]);
        assert!(!stack.push_if_absent(&WindowId::from("a")));
        assert!(stack.push_if_absent(&WindowId::from("c")));
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn position_is_bottom_to_top() {
        let stack = order(&["a", "b", "c"]);
        assert_eq!(stack.position(&WindowId::from("a")), Some(0));
        assert_eq!(stack.position(&WindowId::from("c")), Some(2));
        assert_eq!(stack.position(&WindowId::from("x")), None);
    }

    #[test]
    fn clear_empties() {
        let mut stack = order(&["a"]);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.topmost(), None);
    }
}
