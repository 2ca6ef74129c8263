//! Search for an axis aligned rectangle inside a convex polygon.
use super::pline_contains::point_in_convex;
use crate::core::{math::vec2, math::Vector2, traits::Real};
use static_aabb2d_index::AABB;

/// Number of steps the extent of each axis is divided into.
const STEPS_PER_AXIS: f64 = 30.0;

/// Shrink `bounds` until all four corners lie inside the closed convex polygon `points`.
///
/// Every round moves in each side that has a corner outside the polygon by a thirtieth of the
/// starting extent. Returns `None` when a pair of opposite sides cross.
pub fn find_enclosed_rect<T>(
    points: &[Vector2<T>],
    bounds: AABB<T>,
    pos_equal_eps: T,
) -> Option<AABB<T>>
where
    T: Real,
{
    let steps = T::from_f64_const(STEPS_PER_AXIS);
    let x_step = (bounds.max_x - bounds.min_x) / steps;
    let y_step = (bounds.max_y - bounds.min_y) / steps;
    if x_step <= T::zero() || y_step <= T::zero() {
        return None;
    }

    let inside = |x: T, y: T| point_in_convex(points, vec2(x, y), pos_equal_eps);
    let mut rect = bounds;
    loop {
        if rect.min_x > rect.max_x || rect.min_y > rect.max_y {
            return None;
        }

        let bottom_left = inside(rect.min_x, rect.min_y);
        let top_left = inside(rect.min_x, rect.max_y);
        let bottom_right = inside(rect.max_x, rect.min_y);
        let top_right = inside(rect.max_x, rect.max_y);

        if bottom_left && top_left && bottom_right && top_right {
            return Some(rect);
        }

        if !(bottom_left && top_left) {
            rect.min_x = rect.min_x + x_step;
        }
        if !(bottom_left && bottom_right) {
            rect.min_y = rect.min_y + y_step;
        }
        if !(bottom_right && top_right) {
            rect.max_x = rect.max_x - x_step;
        }
        if !(top_left && top_right) {
            rect.max_y = rect.max_y - y_step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn rectangle_encloses_itself() {
        let pts = [
            vec2(0.0, 0.0),
            vec2(3.0, 0.0),
            vec2(3.0, 2.0),
            vec2(0.0, 2.0),
            vec2(0.0, 0.0),
        ];
        let rect = find_enclosed_rect(&pts, AABB::new(0.0, 0.0, 3.0, 2.0), 1e-4).unwrap();
        assert!(rect.min_x.fuzzy_eq(0.0));
        assert!(rect.min_y.fuzzy_eq(0.0));
        assert!(rect.max_x.fuzzy_eq(3.0));
        assert!(rect.max_y.fuzzy_eq(2.0));
    }

    #[test]
    fn diamond_shrinks_inwards() {
        let pts = [
            vec2(0.0, -1.0),
            vec2(1.0, 0.0),
            vec2(0.0, 1.0),
            vec2(-1.0, 0.0),
            vec2(0.0, -1.0),
        ];
        let rect = find_enclosed_rect(&pts, AABB::new(-1.0, -1.0, 1.0, 1.0), 1e-4).unwrap();
        assert!(rect.max_x > rect.min_x);
        assert!(rect.max_y > rect.min_y);
        for (x, y) in [
            (rect.min_x, rect.min_y),
            (rect.min_x, rect.max_y),
            (rect.max_x, rect.min_y),
            (rect.max_x, rect.max_y),
        ] {
            assert!(point_in_convex(&pts, vec2(x, y), 1e-4));
        }
    }
}
