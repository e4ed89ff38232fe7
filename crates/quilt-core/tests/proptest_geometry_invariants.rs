//! Property-based invariant tests for geometry primitives.
//!
//! 1. `inner` never grows a rectangle and stays inside it.
//! 2. `right`/`bottom` agree with x+width, y+height when no saturation occurs.
//! 3. `from_parts(origin, size)` reproduces the rectangle.
//! 4. Size clamps are monotone.
//! 5. No panics on extreme u16 values.

use quilt_core::geometry::{Point, Rect, Sides, Size};
use proptest::prelude::*;

fn small_rect_strategy() -> impl Strategy<Value = Rect> {
    (0u16..=500, 0u16..=500, 0u16..=500, 0u16..=500).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (any::<u16>(), any::<u16>(), any::<u16>(), any::<u16>())
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn sides_strategy() -> impl Strategy<Value = Sides> {
    (0u16..=50, 0u16..=50, 0u16..=50, 0u16..=50).prop_map(|(t, r, b, l)| Sides::new(t, r, b, l))
}

proptest! {
    #[test]
    fn inner_shrinks_and_is_contained(rect in small_rect_strategy(), sides in sides_strategy()) {
        let inner = rect.inner(sides);
        prop_assert!(inner.width <= rect.width);
        prop_assert!(inner.height <= rect.height);
        if !inner.is_empty() {
            prop_assert!(rect.contains_rect(&inner), "{:?} not inside {:?}", inner, rect);
        }
    }

    #[test]
    fn edges_match_extent(rect in small_rect_strategy()) {
        prop_assert_eq!(rect.right(), rect.x + rect.width);
        prop_assert_eq!(rect.bottom(), rect.y + rect.height);
    }

    #[test]
    fn parts_reassemble(rect in rect_strategy()) {
        prop_assert_eq!(Rect::from_parts(rect.origin(), rect.size()), rect);
        prop_assert_eq!(rect.origin(), Point::new(rect.x, rect.y));
    }

    #[test]
    fn clamps_are_monotone(w in any::<u16>(), h in any::<u16>(), bw in any::<u16>(), bh in any::<u16>()) {
        let s = Size::new(w, h);
        let bound = Size::new(bw, bh);
        let lo = s.clamp_max(bound);
        let hi = s.clamp_min(bound);
        prop_assert!(lo.width <= s.width && lo.height <= s.height);
        prop_assert!(hi.width >= s.width && hi.height >= s.height);
    }

    #[test]
    fn extreme_values_do_not_panic(rect in rect_strategy()) {
        let _ = rect.inner(Sides::all(u16::MAX));
        let _ = rect.contains_rect(&Rect::new(u16::MAX, u16::MAX, u16::MAX, u16::MAX));
        let _ = rect.area();
    }
}
