//! Point containment tests for the point sequences of polylines.
use crate::core::{
    math::{point_on_line_seg, side_value, Vector2},
    traits::Real,
};

/// Returns true if `point` lies on any segment of `points` (within `pos_equal_eps`).
pub fn point_on_path<T>(points: &[Vector2<T>], point: Vector2<T>, pos_equal_eps: T) -> bool
where
    T: Real,
{
    if let [single] = points {
        return single.fuzzy_eq_eps(point, pos_equal_eps);
    }

    points
        .windows(2)
        .any(|w| point_on_line_seg(w[0], w[1], point, pos_equal_eps))
}

/// Returns true if `point` is inside or on the boundary of the closed convex polygon `points`.
///
/// The point is inside if it is never strictly on opposite sides of two edges, which holds for
/// both clockwise and counter clockwise polygons. Points within `pos_equal_eps` of an edge line
/// count as on that edge.
pub fn point_in_convex<T>(points: &[Vector2<T>], point: Vector2<T>, pos_equal_eps: T) -> bool
where
    T: Real,
{
    let mut has_left = false;
    let mut has_right = false;
    for w in points.windows(2) {
        let length = (w[1] - w[0]).length();
        if length < pos_equal_eps {
            continue;
        }

        // signed distance from the edge line
        let dist = side_value(w[0], w[1], point) / length;
        if dist > pos_equal_eps {
            has_left = true;
        } else if dist < -pos_equal_eps {
            has_right = true;
        }

        if has_left && has_right {
            return false;
        }
    }

    true
}

/// Winding number of the closed polygon `points` around `point`.
///
/// Zero means `point` is outside, points on the boundary may give any value.
pub fn winding_number<T>(points: &[Vector2<T>], point: Vector2<T>) -> i32
where
    T: Real,
{
    let mut winding = 0;
    for w in points.windows(2) {
        let (v1, v2) = (w[0], w[1]);
        if v1.y <= point.y {
            if v2.y > point.y && side_value(v1, v2, point) > T::zero() {
                // left and upward crossing
                winding += 1;
            }
        } else if v2.y <= point.y && side_value(v1, v2, point) < T::zero() {
            // right and downward crossing
            winding -= 1;
        }
    }

    winding
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    fn square(reverse: bool) -> Vec<Vector2<f64>> {
        let mut pts = vec![
            vec2(0.0, 0.0),
            vec2(2.0, 0.0),
            vec2(2.0, 2.0),
            vec2(0.0, 2.0),
            vec2(0.0, 0.0),
        ];
        if reverse {
            pts.reverse();
        }
        pts
    }

    #[test]
    fn convex_containment_ignores_winding() {
        for reverse in [false, true] {
            let pts = square(reverse);
            assert!(point_in_convex(&pts, vec2(1.0, 1.0), 1e-4));
            assert!(point_in_convex(&pts, vec2(2.0, 1.0), 1e-4));
            assert!(point_in_convex(&pts, vec2(0.0, 0.0), 1e-4));
            assert!(!point_in_convex(&pts, vec2(3.0, 1.0), 1e-4));
            assert!(!point_in_convex(&pts, vec2(3.0, 3.0), 1e-4));
        }
    }

    #[test]
    fn winding_number_of_concave_polygon() {
        let pts = [
            vec2(0.0, 0.0),
            vec2(4.0, 0.0),
            vec2(4.0, 1.0),
            vec2(1.0, 1.0),
            vec2(1.0, 4.0),
            vec2(0.0, 4.0),
            vec2(0.0, 0.0),
        ];
        assert_eq!(winding_number(&pts, vec2(0.5, 3.0)), 1);
        assert_eq!(winding_number(&pts, vec2(3.0, 0.5)), 1);
        assert_eq!(winding_number(&pts, vec2(3.0, 3.0)), 0);
        let reversed: Vec<_> = pts.iter().rev().copied().collect();
        assert_eq!(winding_number(&reversed, vec2(0.5, 3.0)), -1);
    }

    #[test]
    fn point_on_open_path() {
        let pts = [vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(2.0, 2.0)];
        assert!(point_on_path(&pts, vec2(2.0, 1.0), 1e-4));
        assert!(point_on_path(&pts, vec2(0.0, 0.0), 1e-4));
        assert!(!point_on_path(&pts, vec2(1.0, 1.0), 1e-4));
    }
}
