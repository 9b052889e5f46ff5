//! Fixed chrome metrics and the geometry derived from them.
//!
//! Chrome (title-bar band, resize border) is never stored per window; every
//! chrome rectangle is computed from the content bounds plus these values.

use casement_common::{Bounds, Point, WindowId};

use crate::protocol::OutgoingCommand;

/// Height of the title-bar band above the content area.
pub const BORDER_WIDTH: i32 = 26;
/// Thickness of the resize border.
pub const BORDER_BASE: i32 = 3;
/// Smallest content width/height produced by a local resize.
pub const MIN_SIZE: i32 = 150;
/// Position given to windows the backend maps at (0,0).
pub const PLACEMENT_ANCHOR: Point = Point::new(100, 100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeMetrics {
    pub border_width: i32,
    pub border_base: i32,
    pub min_size: i32,
    pub anchor: Point,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            border_width: BORDER_WIDTH,
            border_base: BORDER_BASE,
            min_size: MIN_SIZE,
            anchor: PLACEMENT_ANCHOR,
        }
    }
}

/// Screen area available to maximized windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: i32,
    pub height: i32,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl ChromeMetrics {
    /// Clamp a content origin so the title bar stays on screen.
    pub fn clamp_origin(&self, origin: Point) -> Point {
        Point::new(origin.x.max(0), origin.y.max(self.border_width))
    }

    /// Content bounds of a maximized window.
    pub fn maximized(&self, screen: Screen) -> Bounds {
        Bounds::new(
            self.border_base,
            self.border_width + self.border_base,
            screen
                .width
                .saturating_sub(self.border_base * 2)
                .max(self.min_size),
            screen
                .height
                .saturating_sub(self.border_width + self.border_base * 2)
                .max(self.min_size),
        )
    }

    /// Outer frame rectangle: content plus title band and border.
    pub fn outer(&self, content: Bounds) -> Bounds {
        Bounds::new(
            content.x.saturating_sub(self.border_base),
            content.y.saturating_sub(self.border_width + self.border_base),
            content.width.saturating_add(self.border_base * 2),
            content
                .height
                .saturating_add(self.border_width + self.border_base * 2),
        )
    }

    pub fn title_bar(&self, content: Bounds) -> Bounds {
        Bounds::new(
            content.x,
            content.y.saturating_sub(self.border_width),
            content.width,
            self.border_width,
        )
    }

    /// Decoration inset reported to the backend for windows it does not
    /// decorate itself.
    pub fn border_registration(&self, window: &WindowId) -> OutgoingCommand {
        OutgoingCommand::WindowRegisterBorder {
            window: window.clone(),
            x: -self.border_base,
            y: -(self.border_width + self.border_base),
            width: self.border_base,
            height: self.border_base,
        }
    }
}
