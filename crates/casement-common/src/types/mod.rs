mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bounds {
        Bounds {
            x: 100,
            y: 100,
            width: 500,
            height: 400,
        }
    }

    #[test]
    fn bounds_contains_is_half_open() {
        let b = sample();
        assert!(b.contains(Point::new(100, 100)));
        assert!(b.contains(Point::new(599, 499)));
        assert!(!b.contains(Point::new(600, 250)));
        assert!(!b.contains(Point::new(250, 500)));
        assert!(!b.contains(Point::new(99, 250)));
    }

    #[test]
    fn empty_bounds_contain_nothing() {
        let b = Bounds {
            width: 0,
            ..sample()
        };
        assert!(!b.contains(Point::new(100, 100)));
    }

    #[test]
    fn bounds_origin_and_edges() {
        let b = sample();
        assert_eq!(b.origin(), Point::new(100, 100));
        assert_eq!(b.right(), 600);
        assert_eq!(b.bottom(), 500);
    }

    #[test]
    fn point_offset_arithmetic() {
        let a = Point::new(10, 20);
        let b = Point::new(3, 5);
        assert_eq!(a - b, Point::new(7, 15));
        assert_eq!(a + b, Point::new(13, 25));
    }

    #[test]
    fn extreme_coordinates_saturate() {
        let b = Bounds::new(i32::MAX - 100, i32::MIN + 10, 5000, 5000);
        assert_eq!(b.right(), i32::MAX);
        assert_eq!(b.bottom(), i32::MIN + 5010);
        assert!(b.contains(Point::new(i32::MAX - 1, i32::MIN + 10)));

        let far = Point::new(i32::MAX, i32::MIN);
        assert_eq!(far + Point::new(10, -10), Point::new(i32::MAX, i32::MIN));
        assert_eq!(far - Point::new(-10, 10), Point::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn window_id_display_and_str() {
        let id = WindowId::from("0x1a00003");
        assert_eq!(id.to_string(), "0x1a00003");
        assert_eq!(id.as_str(), "0x1a00003");
    }

    #[test]
    fn window_id_serializes_as_plain_string() {
        let id = WindowId::from("w1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"w1\"");
        let back: WindowId = serde_json::from_str("\"w1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn window_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(WindowId::from("a"));
        set.insert(WindowId::from("b"));
        set.insert(WindowId::from("a"));
        assert_eq!(set.len(), 2);
    }
}
