//! Interaction state types.

use casement_common::{Bounds, Point};
use serde::{Deserialize, Serialize};

/// Which frame edge or corner a resize handle drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::N,
        ResizeDirection::S,
        ResizeDirection::E,
        ResizeDirection::W,
        ResizeDirection::NE,
        ResizeDirection::NW,
        ResizeDirection::SE,
        ResizeDirection::SW,
    ];

    pub fn moves_top(self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }

    pub fn moves_left(self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    pub fn moves_right(self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }
}

/// Pointer gesture currently driving a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Title-bar drag. `offset` = window origin - pointer at press.
    Moving { offset: Point },
    /// Handle drag, applied against the bounds captured at press.
    Resizing {
        direction: ResizeDirection,
        start: Point,
        snapshot: Bounds,
    },
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Per-window interaction record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowInteraction {
    pub state: InteractionState,
    /// Bounds before maximize; `Some` while the window is maximized.
    pub maximized_from: Option<Bounds>,
}

impl WindowInteraction {
    pub fn is_fullscreen(&self) -> bool {
        self.maximized_from.is_some()
    }
}
