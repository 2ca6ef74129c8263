use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of the shape described by a sequence of points.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// No points.
    Void,
    /// A single point, or several points all at the same position.
    Point,
    /// Two points.
    Line,
    /// Open sequence of three or more points, or a closed sequence that folds back on itself
    /// without enclosing any area.
    Path,
    /// Closed polygon where every turn goes the same way.
    Convex,
    /// Closed polygon with turns in both directions.
    Concave,
}

impl ShapeType {
    /// Returns true if the shape is a closed polygon (convex or concave).
    #[inline]
    pub fn is_polygon(&self) -> bool {
        matches!(self, ShapeType::Convex | ShapeType::Concave)
    }
}

/// Returns true if `points` form a closed sequence: at least 3 points with the last point equal to
/// the first point (compared using `pos_equal_eps`).
#[inline]
pub fn points_closed<T>(points: &[Vector2<T>], pos_equal_eps: T) -> bool
where
    T: Real,
{
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 3 => last.fuzzy_eq_eps(*first, pos_equal_eps),
        _ => false,
    }
}

/// Classify the shape described by `points`.
///
/// Closed polygons are walked over their distinct vertexes (the closing duplicate is ignored) and
/// the sign of the turn at every vertex is compared. A turn whose sine is smaller than
/// `pos_equal_eps` is treated as straight and does not take part in the orientation test.
///
/// # Examples
///
/// ```
/// # use polyline2d::core::math::*;
/// # use polyline2d::polyline::*;
/// let square = [
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     Vector2::new(1.0, 1.0),
///     Vector2::new(0.0, 1.0),
///     Vector2::new(0.0, 0.0),
/// ];
/// assert_eq!(classify(&square, 1e-4), ShapeType::Convex);
/// assert_eq!(classify(&square[..4], 1e-4), ShapeType::Path);
/// assert_eq!(classify(&square[..2], 1e-4), ShapeType::Line);
/// ```
pub fn classify<T>(points: &[Vector2<T>], pos_equal_eps: T) -> ShapeType
where
    T: Real,
{
    match points.len() {
        0 => return ShapeType::Void,
        1 => return ShapeType::Point,
        2 => return ShapeType::Line,
        _ => {}
    }

    let first = points[0];
    if points[1..]
        .iter()
        .all(|p| p.fuzzy_eq_eps(first, pos_equal_eps))
    {
        return ShapeType::Point;
    }

    if !points_closed(points, pos_equal_eps) {
        return ShapeType::Path;
    }

    let distinct = &points[..points.len() - 1];
    let n = distinct.len();
    let mut orientation: Option<bool> = None;
    for i in 0..n {
        let p1 = distinct[i];
        let p2 = distinct[(i + 1) % n];
        let p3 = distinct[(i + 2) % n];
        let e1 = p2 - p1;
        let e2 = p3 - p2;
        let l1 = e1.length();
        let l2 = e2.length();
        if l1 < pos_equal_eps || l2 < pos_equal_eps {
            // repeated vertex
            continue;
        }

        let sine = e1.perp_dot(e2) / (l1 * l2);
        if sine.abs() < pos_equal_eps {
            continue;
        }

        let ccw = sine > T::zero();
        match orientation {
            None => orientation = Some(ccw),
            Some(o) if o != ccw => return ShapeType::Concave,
            Some(_) => {}
        }
    }

    if orientation.is_some() {
        ShapeType::Convex
    } else {
        ShapeType::Path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    const EPS: f64 = 1e-4;

    fn closed(pts: &[(f64, f64)]) -> Vec<Vector2<f64>> {
        let mut result: Vec<_> = pts.iter().map(|&(x, y)| vec2(x, y)).collect();
        result.push(result[0]);
        result
    }

    #[test]
    fn degenerate_counts() {
        assert_eq!(classify::<f64>(&[], EPS), ShapeType::Void);
        assert_eq!(classify(&[vec2(1.0, 1.0)], EPS), ShapeType::Point);
        assert_eq!(classify(&[vec2(1.0, 1.0), vec2(1.0, 1.0)], EPS), ShapeType::Line);
        let same = [vec2(1.0, 1.0), vec2(1.00001, 1.0), vec2(1.0, 0.99999)];
        assert_eq!(classify(&same, EPS), ShapeType::Point);
    }

    #[test]
    fn both_windings_are_convex() {
        let ccw = closed(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
        let cw = closed(&[(0.0, 0.0), (0.0, 3.0), (4.0, 3.0), (4.0, 0.0)]);
        assert_eq!(classify(&ccw, EPS), ShapeType::Convex);
        assert_eq!(classify(&cw, EPS), ShapeType::Convex);
    }

    #[test]
    fn collinear_vertex_stays_convex() {
        let pts = closed(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
        assert_eq!(classify(&pts, EPS), ShapeType::Convex);
    }

    #[test]
    fn turn_at_first_vertex_is_checked() {
        // reflex turn only at the start vertex
        let pts = closed(&[(2.0, 1.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
        assert_eq!(classify(&pts, EPS), ShapeType::Concave);
    }

    #[test]
    fn l_shape_is_concave() {
        let pts = closed(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 1.0),
            (1.0, 1.0),
            (1.0, 4.0),
            (0.0, 4.0),
        ]);
        assert_eq!(classify(&pts, EPS), ShapeType::Concave);
    }

    #[test]
    fn folded_closed_sequence_is_path() {
        let pts = closed(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0)]);
        assert_eq!(classify(&pts, EPS), ShapeType::Path);
    }

    #[test]
    fn open_sequence_is_path() {
        let pts = [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 1.0)];
        assert_eq!(classify(&pts, EPS), ShapeType::Path);
        assert!(!points_closed(&pts, EPS));
    }
}
