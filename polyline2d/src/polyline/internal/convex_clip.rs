//! Clipping of line segments and paths against convex polygons.
use super::pline_contains::point_in_convex;
use crate::{
    core::{
        math::{SegIntr, Vector2},
        traits::Real,
    },
    polyline::{Fragment, IntersectOptions, Polyline},
    Error, Result,
};

/// Push `point` onto `points` unless an equal point (within `eps`) is already present.
fn push_distinct<T>(points: &mut Vec<Vector2<T>>, point: Vector2<T>, eps: T)
where
    T: Real,
{
    if !points.iter().any(|p| p.fuzzy_eq_eps(point, eps)) {
        points.push(point);
    }
}

/// Clip the segment `p0 -> p1` against the closed convex polygon `convex`.
///
/// Candidate points are the intersects with every polygon edge plus the segment end points that
/// lie inside the polygon. The returned fragment spans the extreme candidates along the segment
/// direction, so it is oriented from `p0` towards `p1`.
pub fn clip_seg<T>(
    convex: &[Vector2<T>],
    p0: Vector2<T>,
    p1: Vector2<T>,
    options: &IntersectOptions<T>,
) -> Option<Fragment<T>>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    let mut candidates = Vec::new();

    if point_in_convex(convex, p0, eps) {
        candidates.push(p0);
    }
    if point_in_convex(convex, p1, eps) {
        push_distinct(&mut candidates, p1, eps);
    }

    for edge in convex.windows(2) {
        match options.seg_intersect(p0, p1, edge[0], edge[1]) {
            SegIntr::NoIntersect => {}
            SegIntr::Point(p) => push_distinct(&mut candidates, p, eps),
            SegIntr::Overlapping(a, b) => {
                push_distinct(&mut candidates, a, eps);
                push_distinct(&mut candidates, b, eps);
            }
        }
    }

    match candidates.len() {
        0 => None,
        1 => Some(Fragment::Point(candidates[0])),
        _ => {
            let dir = p1 - p0;
            let t_of = |p: &Vector2<T>| (*p - p0).dot(dir);
            let mut first = candidates[0];
            let mut last = candidates[0];
            for p in &candidates[1..] {
                if t_of(p) < t_of(&first) {
                    first = *p;
                }
                if t_of(p) > t_of(&last) {
                    last = *p;
                }
            }

            if first.fuzzy_eq_eps(last, eps) {
                Some(Fragment::Point(first))
            } else {
                Some(Fragment::Segment(first, last))
            }
        }
    }
}

/// Clip the open path `path` against the closed convex polygon `convex`, returning the points of
/// the single connected chain inside the polygon (empty if there is none).
///
/// Fails with [Error::MultiComponentResult] if the path enters the polygon a second time.
pub fn clip_path<T>(
    convex: &[Vector2<T>],
    path: &[Vector2<T>],
    options: &IntersectOptions<T>,
) -> Result<Vec<Vector2<T>>>
where
    T: Real,
{
    let join_eps = options.stitch_join_eps;
    let mut chain: Vec<Vector2<T>> = Vec::new();

    for w in path.windows(2) {
        let Some(frag) = clip_seg(convex, w[0], w[1], options) else {
            continue;
        };

        match chain.last() {
            None => {
                chain.push(frag.head());
                if matches!(frag, Fragment::Segment(..)) {
                    chain.push(frag.tail());
                }
            }
            Some(tail) if frag.head().fuzzy_eq_eps(*tail, join_eps) => {
                if matches!(frag, Fragment::Segment(..)) {
                    chain.push(frag.tail());
                }
            }
            Some(_) => {
                log::debug!("path enters convex polygon more than once");
                return Err(Error::MultiComponentResult);
            }
        }
    }

    Ok(chain)
}

/// Clip every edge of the closed convex polygon `convex` against the closed convex polygon
/// `other`, appending the inside pieces to `fragments`.
pub fn clip_edges<T>(
    convex: &Polyline<T>,
    other: &Polyline<T>,
    options: &IntersectOptions<T>,
    fragments: &mut Vec<Fragment<T>>,
) where
    T: Real,
{
    for (p0, p1) in convex.iter_segments() {
        if let Some(frag) = clip_seg(other.points(), p0, p1, options) {
            fragments.push(frag);
        }
    }
}
