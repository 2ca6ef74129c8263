use super::{
    base_math::{point_on_line_seg, side_value},
    Vector2,
};
use crate::core::traits::{FuzzyOrd, Real};

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegIntr<T = f64>
where
    T: Real,
{
    /// No intersect, segments are apart or parallel and not collinear.
    NoIntersect,
    /// Segments meet at a single point.
    Point(Vector2<T>),
    /// Segments are collinear and share a sub-segment, given as its start and end point oriented
    /// along the direction of the first segment.
    Overlapping(Vector2<T>, Vector2<T>),
}

/// Finds the intersect between the line segment `p1 -> p2` and the line segment `p3 -> p4`.
///
/// Uses the parametric form `P(t) = p0 + t * (p1 - p0)` of both segments. The single `eps` value
/// is compared against normalized quantities, never raw cross products: the sine of the angle
/// between the segments (parallel test), the distance of `p3` from the line through `p1 -> p2`
/// (collinear test) and the parametric values (so a value in `[-eps, 1 + eps]` is accepted as on
/// the segment). Segments shorter than `eps` are treated as points.
///
/// # Explanation on result cases `SegIntr`
/// ## `NoIntersect`
/// * Segments are parallel and not collinear
/// * Segments are collinear but their projections do not overlap
/// * Segments are not parallel and at least one must be extended to intersect
///
/// ## `Point`
/// * Segments are not parallel and cross or touch at one point
/// * Segments are collinear and touch end to end
/// * One segment is a point lying on the other segment
///
/// ## `Overlapping`
/// * Segments are collinear and share a sub-segment of nonzero length
///
/// # Examples
///
/// ```
/// # use polyline2d::core::math::*;
/// let p1 = Vector2::new(0.0, 0.0);
/// let p2 = Vector2::new(4.0, 0.0);
/// let p3 = Vector2::new(2.0, 0.0);
/// let p4 = Vector2::new(6.0, 0.0);
/// match seg_intersect(p1, p2, p3, p4, 1e-5) {
///     SegIntr::Overlapping(start, end) => {
///         assert_eq!(start, Vector2::new(2.0, 0.0));
///         assert_eq!(end, Vector2::new(4.0, 0.0));
///     }
///     r => unreachable!("expected overlap, got {:?}", r),
/// }
/// ```
pub fn seg_intersect<T>(
    p1: Vector2<T>,
    p2: Vector2<T>,
    p3: Vector2<T>,
    p4: Vector2<T>,
    eps: T,
) -> SegIntr<T>
where
    T: Real,
{
    let v = p2 - p1;
    let u = p4 - p3;
    let v_len = v.length();
    let u_len = u.length();

    match (v_len < eps, u_len < eps) {
        (true, true) => {
            return if p1.fuzzy_eq_eps(p3, eps) {
                SegIntr::Point(p1)
            } else {
                SegIntr::NoIntersect
            };
        }
        (true, false) => {
            return if point_on_line_seg(p3, p4, p1, eps) {
                SegIntr::Point(p1)
            } else {
                SegIntr::NoIntersect
            };
        }
        (false, true) => {
            return if point_on_line_seg(p1, p2, p3, eps) {
                SegIntr::Point(p3)
            } else {
                SegIntr::NoIntersect
            };
        }
        (false, false) => {}
    }

    let d = v.perp_dot(u);

    // sine of the angle between the segments
    if (d / (v_len * u_len)).abs() < eps {
        // distance of the second segment from the first segment's line
        if (side_value(p1, p2, p3) / v_len).abs() < eps {
            return collinear_overlap(p1, p2, p3, p4, eps);
        }
        return SegIntr::NoIntersect;
    }

    let n1 = (p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x);
    let n2 = (p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x);
    let ua = n1 / d;
    let ub = n2 / d;

    let (zero, one) = (T::zero(), T::one());
    if !ua.fuzzy_in_range_eps(zero, one, eps) || !ub.fuzzy_in_range_eps(zero, one, eps) {
        return SegIntr::NoIntersect;
    }

    SegIntr::Point(p1 + (p2 - p1).scale(ua))
}

fn axis_value<T>(p: Vector2<T>, use_x: bool) -> T
where
    T: Real,
{
    if use_x {
        p.x
    } else {
        p.y
    }
}

fn collinear_overlap<T>(
    p1: Vector2<T>,
    p2: Vector2<T>,
    p3: Vector2<T>,
    p4: Vector2<T>,
    eps: T,
) -> SegIntr<T>
where
    T: Real,
{
    let all = [p1, p2, p3, p4];
    let extent = |f: fn(&Vector2<T>) -> T| {
        let mut lo = f(&all[0]);
        let mut hi = lo;
        for p in &all[1..] {
            let v = f(p);
            if v < lo {
                lo = v;
            }
            if v > hi {
                hi = v;
            }
        }
        hi - lo
    };

    let use_x = extent(|p| p.x) >= extent(|p| p.y);

    let (a1, a2) = (axis_value(p1, use_x), axis_value(p2, use_x));
    let (b1, b2) = (axis_value(p3, use_x), axis_value(p4, use_x));
    let (min1, max1) = super::min_max(a1, a2);
    let (min2, max2) = super::min_max(b1, b2);

    let lo = if min1 > min2 { min1 } else { min2 };
    let hi = if max1 < max2 { max1 } else { max2 };

    if !lo.fuzzy_lt_eps(hi, eps) {
        return SegIntr::NoIntersect;
    }

    // maps a coordinate along the projection axis back onto the shared line
    let (ref0, ref1) = if (a2 - a1).abs() >= (b2 - b1).abs() {
        (p1, p2)
    } else {
        (p3, p4)
    };
    let ref_span = axis_value(ref1, use_x) - axis_value(ref0, use_x);
    let point_at = |c: T| {
        if ref_span == T::zero() {
            ref0
        } else {
            let t = (c - axis_value(ref0, use_x)) / ref_span;
            ref0 + (ref1 - ref0).scale(t)
        }
    };

    if hi - lo <= eps {
        return SegIntr::Point(point_at((lo + hi) / T::two()));
    }

    let start = point_at(lo);
    let end = point_at(hi);
    if a2 >= a1 {
        SegIntr::Overlapping(start, end)
    } else {
        SegIntr::Overlapping(end, start)
    }
}
