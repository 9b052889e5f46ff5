use casement_common::{Point, WindowId};

use super::frame::{Frame, Region};

impl Frame {
    /// Region of this frame under `p`, if any.
    pub fn region_at(&self, p: Point) -> Option<Region> {
        if !self.outer.contains(p) {
            return None;
        }
        if self.close_button.contains(p) {
            return Some(Region::Close);
        }
        if self.maximize_button.contains(p) {
            return Some(Region::Maximize);
        }
        if let Some((direction, _)) = self.handles.iter().find(|(_, b)| b.contains(p)) {
            return Some(Region::Handle(*direction));
        }
        if self.title_bar.contains(p) {
            return Some(Region::TitleBar);
        }
        Some(Region::Body)
    }
}

/// Find the topmost frame under `p`. `frames` must be bottom to top, as
/// returned by [`super::project`].
pub fn hit_test(frames: &[Frame], p: Point) -> Option<(WindowId, Region)> {
    frames
        .iter()
        .rev()
        .find_map(|frame| frame.region_at(p).map(|region| (frame.id.clone(), region)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::ChromeMetrics;
    use crate::interaction::ResizeDirection;
    use crate::registry::{Registry, WindowData};
    use crate::render::project;
    use casement_common::Bounds;

    fn frames() -> Vec<Frame> {
        let mut registry = Registry::new();
        for (id, x) in [("a", 100), ("b", 300)] {
            registry.insert(WindowData {
                id: WindowId::from(id),
                name: id.into(),
                visible: true,
                bounds: Bounds::new(x, 100, 400, 300),
                icon: None,
            });
        }
        project(&registry, &ChromeMetrics::default(), None)
    }

    #[test]
    fn overlapping_point_hits_topmost() {
        let (id, region) = hit_test(&frames(), Point::new(350, 200)).unwrap();
        assert_eq!(id, WindowId::from("b"));
        assert_eq!(region, Region::Body);
    }

    #[test]
    fn title_bar_and_buttons() {
        let frames = frames();
        assert_eq!(
            hit_test(&frames, Point::new(320, 80)),
            Some((WindowId::from("b"), Region::TitleBar))
        );
        // b spans x 300..700; close is the rightmost 26px of its title bar.
        assert_eq!(
            hit_test(&frames, Point::new(690, 80)),
            Some((WindowId::from("b"), Region::Close))
        );
        assert_eq!(
            hit_test(&frames, Point::new(660, 80)),
            Some((WindowId::from("b"), Region::Maximize))
        );
    }

    #[test]
    fn resize_handles() {
        let frames = frames();
        // b outer: x 297..703, y 71..403
        assert_eq!(
            hit_test(&frames, Point::new(702, 402)),
            Some((WindowId::from("b"), Region::Handle(ResizeDirection::SE)))
        );
        assert_eq!(
            hit_test(&frames, Point::new(500, 72)),
            Some((WindowId::from("b"), Region::Handle(ResizeDirection::N)))
        );
        // Left border of a is covered by nothing else.
        assert_eq!(
            hit_test(&frames, Point::new(98, 250)),
            Some((WindowId::from("a"), Region::Handle(ResizeDirection::W)))
        );
    }

    #[test]
    fn miss_returns_none() {
        assert_eq!(hit_test(&frames(), Point::new(5, 5)), None);
        assert_eq!(hit_test(&[], Point::new(5, 5)), None);
    }
}
