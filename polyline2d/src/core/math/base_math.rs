use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use polyline2d::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // Dot product used to find angles
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 < T::fuzzy_epsilon() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 < c1 + T::fuzzy_epsilon() {
        return p1;
    }

    let b = c1 / c2;
    p0 + v.scale(b)
}

/// Signed side value of `point` relative to the direction vector `p1 - p0`.
///
/// Positive when `point` is left of the direction, negative when right, zero when collinear. The
/// magnitude is twice the area of the triangle `p0, p1, point`.
///
/// # Examples
///
/// ```
/// # use polyline2d::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(2.0, 0.0);
/// assert!(side_value(p0, p1, Vector2::new(1.0, 1.0)) > 0.0);
/// assert!(side_value(p0, p1, Vector2::new(1.0, -1.0)) < 0.0);
/// assert_eq!(side_value(p0, p1, Vector2::new(5.0, 0.0)), 0.0);
/// ```
#[inline]
pub fn side_value<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    (p1.x - p0.x) * (point.y - p0.y) - (p1.y - p0.y) * (point.x - p0.x)
}

/// Returns true if `point` lies on the line segment `p0` to `p1`, within `epsilon` distance.
///
/// A zero length segment is treated as a point.
///
/// # Examples
///
/// ```
/// # use polyline2d::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(4.0, 4.0);
/// assert!(point_on_line_seg(p0, p1, Vector2::new(1.0, 1.0), 1e-4));
/// assert!(point_on_line_seg(p0, p1, Vector2::new(4.0, 4.0), 1e-4));
/// assert!(!point_on_line_seg(p0, p1, Vector2::new(5.0, 5.0), 1e-4));
/// assert!(!point_on_line_seg(p0, p1, Vector2::new(1.0, 1.1), 1e-4));
/// ```
#[inline]
pub fn point_on_line_seg<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>, epsilon: T) -> bool
where
    T: Real,
{
    let closest = line_seg_closest_point(p0, p1, point);
    dist_squared(closest, point) < epsilon * epsilon
}
