//! Pure geometry for move and resize gestures.

use casement_common::{Bounds, Point};

use crate::chrome::ChromeMetrics;

use super::types::ResizeDirection;

/// Window origin for a title-bar drag.
pub fn moved_origin(pointer: Point, offset: Point, chrome: &ChromeMetrics) -> Point {
    chrome.clamp_origin(pointer + offset)
}

/// Bounds for a handle drag of `delta` pixels against `snapshot`.
///
/// Dragged leading edges (`n`, `w`) keep the opposite edge fixed, so the
/// origin stops once the size reaches `min_size`. Every dimension ends at
/// least `min_size`; every origin obeys the same minimums as a move.
pub fn resized(
    snapshot: Bounds,
    direction: ResizeDirection,
    delta: Point,
    chrome: &ChromeMetrics,
) -> Bounds {
    let min = chrome.min_size;

    let (x, width) = if direction.moves_left() {
        drag_leading_edge(snapshot.x, snapshot.width, delta.x, 0, min)
    } else if direction.moves_right() {
        (snapshot.x.max(0), snapshot.width.saturating_add(delta.x).max(min))
    } else {
        (snapshot.x.max(0), snapshot.width.max(min))
    };

    let (y, height) = if direction.moves_top() {
        drag_leading_edge(
            snapshot.y,
            snapshot.height,
            delta.y,
            chrome.border_width,
            min,
        )
    } else if direction.moves_bottom() {
        (
            snapshot.y.max(chrome.border_width),
            snapshot.height.saturating_add(delta.y).max(min),
        )
    } else {
        (
            snapshot.y.max(chrome.border_width),
            snapshot.height.max(min),
        )
    };

    Bounds::new(x, y, width, height)
}

/// Move a leading edge by `delta` with the far edge pinned. Dragging past
/// `min_extent` stops the origin instead of pushing the window along.
fn drag_leading_edge(
    origin: i32,
    extent: i32,
    delta: i32,
    min_origin: i32,
    min_extent: i32,
) -> (i32, i32) {
    let far_edge = origin.saturating_add(extent);
    let new_origin = origin
        .saturating_add(delta)
        .min(far_edge.saturating_sub(min_extent))
        .max(min_origin);
    (new_origin, far_edge.saturating_sub(new_origin).max(min_extent))
}
