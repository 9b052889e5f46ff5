use casement_common::{Bounds, WindowId};

use crate::chrome::ChromeMetrics;
use crate::interaction::ResizeDirection;
use crate::registry::Registry;

/// Part of a frame that can receive a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Close,
    Maximize,
    TitleBar,
    Handle(ResizeDirection),
    /// Anywhere else inside the frame.
    Body,
}

/// One visible window, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub id: WindowId,
    pub name: String,
    pub icon: Option<String>,
    /// `1 + index` in the stacking order; 0 for unstacked windows.
    pub z_index: usize,
    pub content: Bounds,
    /// Content plus title band and resize border.
    pub outer: Bounds,
    pub title_bar: Bounds,
    pub close_button: Bounds,
    pub maximize_button: Bounds,
    pub handles: [(ResizeDirection, Bounds); 8],
    /// Title bar drawn in its "being dragged" style.
    pub title_active: bool,
}

impl Frame {
    fn new(
        id: WindowId,
        name: String,
        icon: Option<String>,
        z_index: usize,
        content: Bounds,
        chrome: &ChromeMetrics,
    ) -> Self {
        let outer = chrome.outer(content);
        let title_bar = chrome.title_bar(content);
        let bw = chrome.border_width;
        let close_button = Bounds::new(title_bar.right().saturating_sub(bw), title_bar.y, bw, bw);
        let maximize_button =
            Bounds::new(title_bar.right().saturating_sub(2 * bw), title_bar.y, bw, bw);

        Self {
            id,
            name,
            icon,
            z_index,
            content,
            outer,
            title_bar,
            close_button,
            maximize_button,
            handles: handle_grid(outer, chrome.border_base),
            title_active: false,
        }
    }

    pub fn handle(&self, direction: ResizeDirection) -> Bounds {
        self.handles
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, b)| *b)
            .unwrap_or_default()
    }
}

/// Eight border cells of a 3x3 grid laid over the outer frame.
fn handle_grid(outer: Bounds, thickness: i32) -> [(ResizeDirection, Bounds); 8] {
    let inner_w = outer.width.saturating_sub(2 * thickness).max(0);
    let inner_h = outer.height.saturating_sub(2 * thickness).max(0);
    let (left, mid_x, right) = (
        outer.x,
        outer.x.saturating_add(thickness),
        outer.right().saturating_sub(thickness),
    );
    let (top, mid_y, bottom) = (
        outer.y,
        outer.y.saturating_add(thickness),
        outer.bottom().saturating_sub(thickness),
    );

    [
        (ResizeDirection::NW, Bounds::new(left, top, thickness, thickness)),
        (ResizeDirection::N, Bounds::new(mid_x, top, inner_w, thickness)),
        (ResizeDirection::NE, Bounds::new(right, top, thickness, thickness)),
        (ResizeDirection::W, Bounds::new(left, mid_y, thickness, inner_h)),
        (ResizeDirection::E, Bounds::new(right, mid_y, thickness, inner_h)),
        (ResizeDirection::SW, Bounds::new(left, bottom, thickness, thickness)),
        (ResizeDirection::S, Bounds::new(mid_x, bottom, inner_w, thickness)),
        (ResizeDirection::SE, Bounds::new(right, bottom, thickness, thickness)),
    ]
}

/// Project every visible window into a frame, bottom to top.
///
/// `dragging` marks the window whose title bar is being dragged.
pub fn project(
    registry: &Registry,
    chrome: &ChromeMetrics,
    dragging: Option<&WindowId>,
) -> Vec<Frame> {
    let stacking = registry.stacking();
    let mut frames: Vec<Frame> = registry
        .windows()
        .filter(|w| w.visible)
        .map(|w| {
            let z_index = stacking.position(&w.id).map_or(0, |i| i + 1);
            let mut frame = Frame::new(
                w.id.clone(),
                w.name.clone(),
                w.icon.clone(),
                z_index,
                w.bounds,
                chrome,
            );
            frame.title_active = dragging == Some(&w.id);
            frame
        })
        .collect();

    frames.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
    frames
}
