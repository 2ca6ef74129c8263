//! Intersection queries between polylines, dispatched on the pair of shape types.
use super::{
    convex_clip::{clip_edges, clip_path, clip_seg},
    pline_contains::{point_in_convex, point_on_path},
    seg_stitch::stitch,
};
use crate::{
    core::{
        math::{min_max, point_on_line_seg, SegIntr, Vector2},
        traits::Real,
    },
    polyline::{
        Fragment, IntersectOptions, IntersectionResult, Polyline, ShapeType, StitchResult,
    },
    Error, Result,
};
use static_aabb2d_index::{
    StaticAABB2DIndex, StaticAABB2DIndexBuildError, StaticAABB2DIndexBuilder,
};
use std::ops::ControlFlow;

/// Helper function to unwrap a spatial index from a builder or panic for the unexpected case of
/// failure.
fn unwrap_spatial_index<T>(builder: StaticAABB2DIndexBuilder<T>) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    match builder.build() {
        Ok(x) => x,
        Err(e) => match e {
            StaticAABB2DIndexBuildError::ItemCountError { .. } => {
                unreachable!("internal library error: count mismatch when building spatial index")
            }
            StaticAABB2DIndexBuildError::NumericCastError => {
                panic!("failed to cast numeric type: {e}")
            }
        },
    }
}

/// Spatial index of the bounding boxes of the segments of `points`, keyed by segment start index.
fn create_seg_index<T>(points: &[Vector2<T>]) -> StaticAABB2DIndex<T>
where
    T: Real,
{
    let seg_count = points.len().saturating_sub(1);
    let mut builder = StaticAABB2DIndexBuilder::new(seg_count);
    for w in points.windows(2) {
        let (min_x, max_x) = min_max(w[0].x, w[1].x);
        let (min_y, max_y) = min_max(w[0].y, w[1].y);
        builder.add(min_x, min_y, max_x, max_y);
    }

    unwrap_spatial_index(builder)
}

/// Run the segment intersector on every pair of segments of `points1` and `points2` whose bounding
/// boxes overlap, visiting every intersect found in segment order of `points1` then `points2`.
fn visit_seg_intersects<T, F>(
    points1: &[Vector2<T>],
    points2: &[Vector2<T>],
    options: &IntersectOptions<T>,
    mut visitor: F,
) -> ControlFlow<()>
where
    T: Real,
    F: FnMut(SegIntr<T>) -> ControlFlow<()>,
{
    if points1.len() < 2 || points2.len() < 2 {
        return ControlFlow::Continue(());
    }

    let index2 = create_seg_index(points2);
    let fuzz = options.pos_equal_eps;
    let mut query_stack = Vec::new();
    for w in points1.windows(2) {
        let (min_x, max_x) = min_max(w[0].x, w[1].x);
        let (min_y, max_y) = min_max(w[0].y, w[1].y);
        let mut candidates = index2.query_with_stack(
            min_x - fuzz,
            min_y - fuzz,
            max_x + fuzz,
            max_y + fuzz,
            &mut query_stack,
        );
        candidates.sort_unstable();

        for j in candidates {
            let intr = options.seg_intersect(w[0], w[1], points2[j], points2[j + 1]);
            if intr != SegIntr::NoIntersect {
                visitor(intr)?;
            }
        }
    }

    ControlFlow::Continue(())
}

/// Returns true if any segment of `points1` intersects any segment of `points2`.
fn any_seg_intersects<T>(
    points1: &[Vector2<T>],
    points2: &[Vector2<T>],
    options: &IntersectOptions<T>,
) -> bool
where
    T: Real,
{
    visit_seg_intersects(points1, points2, options, |_| ControlFlow::Break(())).is_break()
}

/// Drop point fragments lying on segment fragments and duplicate fragments (in either direction).
fn prune_fragments<T>(fragments: Vec<Fragment<T>>, eps: T) -> Vec<Fragment<T>>
where
    T: Real,
{
    let segments: Vec<(Vector2<T>, Vector2<T>)> = fragments
        .iter()
        .filter_map(|f| match *f {
            Fragment::Segment(p0, p1) => Some((p0, p1)),
            Fragment::Point(_) => None,
        })
        .collect();

    let mut result: Vec<Fragment<T>> = Vec::with_capacity(fragments.len());
    for frag in fragments {
        let keep = match frag {
            Fragment::Point(p) => {
                !segments
                    .iter()
                    .any(|&(s0, s1)| point_on_line_seg(s0, s1, p, eps))
                    && !result.iter().any(|r| match *r {
                        Fragment::Point(q) => q.fuzzy_eq_eps(p, eps),
                        Fragment::Segment(..) => false,
                    })
            }
            Fragment::Segment(p0, p1) => !result.iter().any(|r| match *r {
                Fragment::Segment(q0, q1) => {
                    (q0.fuzzy_eq_eps(p0, eps) && q1.fuzzy_eq_eps(p1, eps))
                        || (q0.fuzzy_eq_eps(p1, eps) && q1.fuzzy_eq_eps(p0, eps))
                }
                Fragment::Point(_) => false,
            }),
        };

        if keep {
            result.push(frag);
        }
    }

    result
}

/// Convert a chain of points into the matching result variant.
fn chain_result<T>(chain: Polyline<T>) -> IntersectionResult<T>
where
    T: Real,
{
    match chain.len() {
        0 => IntersectionResult::None,
        1 => IntersectionResult::Point(chain[0]),
        2 => IntersectionResult::Segment(chain[0], chain[1]),
        _ => IntersectionResult::Polyline(chain),
    }
}

/// Intersection of two line segments.
fn line_line<T>(
    line1: &Polyline<T>,
    line2: &Polyline<T>,
    options: &IntersectOptions<T>,
) -> IntersectionResult<T>
where
    T: Real,
{
    match options.seg_intersect(line1[0], line1[1], line2[0], line2[1]) {
        SegIntr::NoIntersect => IntersectionResult::None,
        SegIntr::Point(p) => IntersectionResult::Point(p),
        SegIntr::Overlapping(p0, p1) => IntersectionResult::Segment(p0, p1),
    }
}

/// Intersection of two open paths (lines count as single segment paths).
///
/// Every intersect between segments becomes a fragment, the fragments are stitched into one
/// chain. Fails with [Error::MultiComponentResult] if they do not form a single chain.
fn path_path<T>(
    path1: &Polyline<T>,
    path2: &Polyline<T>,
    options: &IntersectOptions<T>,
) -> Result<IntersectionResult<T>>
where
    T: Real,
{
    let mut fragments = Vec::new();
    let _ = visit_seg_intersects(path1.points(), path2.points(), options, |intr| {
        if let Some(frag) = Fragment::from_seg_intr(intr) {
            fragments.push(frag);
        }
        ControlFlow::Continue(())
    });

    let fragments = prune_fragments(fragments, options.pos_equal_eps);
    match stitch(fragments, options.stitch_join_eps) {
        StitchResult::Closed(chain) | StitchResult::Open(chain) => Ok(chain_result(chain)),
        StitchResult::Partial { .. } => Err(Error::MultiComponentResult),
    }
}

/// Intersection of a convex polygon and a line segment.
fn convex_line<T>(
    convex: &Polyline<T>,
    line: &Polyline<T>,
    options: &IntersectOptions<T>,
) -> IntersectionResult<T>
where
    T: Real,
{
    match clip_seg(convex.points(), line[0], line[1], options) {
        None => IntersectionResult::None,
        Some(Fragment::Point(p)) => IntersectionResult::Point(p),
        Some(Fragment::Segment(p0, p1)) => IntersectionResult::Segment(p0, p1),
    }
}

/// Intersection of a convex polygon and an open path.
fn convex_path<T>(
    convex: &Polyline<T>,
    path: &Polyline<T>,
    options: &IntersectOptions<T>,
) -> Result<IntersectionResult<T>>
where
    T: Real,
{
    let chain = clip_path(convex.points(), path.points(), options)?;
    Ok(chain_result(Polyline::from_points(chain)))
}

/// Intersection of two convex polygons.
///
/// If every vertex of one polygon is inside the other that polygon is the result. Otherwise every
/// edge of each polygon is clipped against the other and the pieces are stitched into the boundary
/// of the intersection.
fn convex_convex<T>(
    convex1: &Polyline<T>,
    convex2: &Polyline<T>,
    options: &IntersectOptions<T>,
) -> IntersectionResult<T>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    let all_inside = |a: &Polyline<T>, b: &Polyline<T>| {
        a.points()
            .iter()
            .all(|p| point_in_convex(b.points(), *p, eps))
    };

    if all_inside(convex1, convex2) {
        log::debug!("first convex polygon is enclosed by the second");
        return IntersectionResult::Polyline(convex1.clone());
    }

    if all_inside(convex2, convex1) {
        log::debug!("second convex polygon is enclosed by the first");
        return IntersectionResult::Polyline(convex2.clone());
    }

    let mut fragments = Vec::new();
    clip_edges(convex1, convex2, options, &mut fragments);
    clip_edges(convex2, convex1, options, &mut fragments);
    let fragments = prune_fragments(fragments, eps);

    match stitch(fragments, options.stitch_join_eps) {
        StitchResult::Closed(chain) | StitchResult::Open(chain) => chain_result(chain),
        // partial chain is already logged by the stitcher
        StitchResult::Partial { chain, .. } => chain_result(chain),
    }
}

/// Returns true if the first point of `shape` is inside `convex` or any of their segments
/// intersect.
fn convex_touches<T>(
    convex: &Polyline<T>,
    shape: &Polyline<T>,
    options: &IntersectOptions<T>,
) -> bool
where
    T: Real,
{
    point_in_convex(convex.points(), shape[0], options.pos_equal_eps)
        || any_seg_intersects(convex.points(), shape.points(), options)
}

/// Shared checks before dispatching on the shape type pair. Returns `None` if the query can be
/// answered as "no intersection" without looking at the segments.
fn gate<T>(
    pline1: &Polyline<T>,
    pline2: &Polyline<T>,
    options: &IntersectOptions<T>,
) -> Option<(ShapeType, ShapeType)>
where
    T: Real,
{
    let (Some(b1), Some(b2)) = (pline1.bounds(), pline2.bounds()) else {
        return None;
    };

    let fuzz = options.pos_equal_eps;
    if !b1.overlaps(
        b2.min_x - fuzz,
        b2.min_y - fuzz,
        b2.max_x + fuzz,
        b2.max_y + fuzz,
    ) {
        log::trace!("bounding boxes do not overlap");
        return None;
    }

    Some((pline1.shape_type(), pline2.shape_type()))
}

/// Returns true if `pline1` and `pline2` share at least one point.
///
/// Uses cheaper tests than [intersection]: any intersecting segment pair, or the first vertex of
/// one shape inside the other convex polygon.
pub fn is_intersecting<T>(
    pline1: &Polyline<T>,
    pline2: &Polyline<T>,
    options: &IntersectOptions<T>,
) -> Result<bool>
where
    T: Real,
{
    use ShapeType::*;

    let Some((type1, type2)) = gate(pline1, pline2, options) else {
        return Ok(false);
    };

    log::trace!("testing intersect of {:?} with {:?}", type1, type2);
    let eps = options.pos_equal_eps;
    let result = match (type1, type2) {
        (Void, _) | (_, Void) => false,
        (Concave, _) | (_, Concave) => return Err(Error::UnsupportedShapeType(type1, type2)),
        (Point, Point) => pline1[0].fuzzy_eq_eps(pline2[0], eps),
        (Point, Line | Path) => point_on_path(pline2.points(), pline1[0], eps),
        (Line | Path, Point) => point_on_path(pline1.points(), pline2[0], eps),
        (Point, Convex) => point_in_convex(pline2.points(), pline1[0], eps),
        (Convex, Point) => point_in_convex(pline1.points(), pline2[0], eps),
        (Line | Path, Line | Path) => {
            any_seg_intersects(pline1.points(), pline2.points(), options)
        }
        (Convex, Line | Path) => convex_touches(pline1, pline2, options),
        (Line | Path, Convex) => convex_touches(pline2, pline1, options),
        (Convex, Convex) => {
            point_in_convex(pline2.points(), pline1[0], eps)
                || convex_touches(pline1, pline2, options)
        }
    };

    Ok(result)
}

/// Compute the intersection of `pline1` and `pline2`.
///
/// Fails with [Error::UnsupportedShapeType] if either shape is concave and with
/// [Error::MultiComponentResult] if the intersection of paths consists of more than one piece.
pub fn intersection<T>(
    pline1: &Polyline<T>,
    pline2: &Polyline<T>,
    options: &IntersectOptions<T>,
) -> Result<IntersectionResult<T>>
where
    T: Real,
{
    use ShapeType::*;

    let Some((type1, type2)) = gate(pline1, pline2, options) else {
        return Ok(IntersectionResult::None);
    };

    log::trace!("intersecting {:?} with {:?}", type1, type2);
    let eps = options.pos_equal_eps;
    let point_if = |hit: bool, p: Vector2<T>| {
        if hit {
            IntersectionResult::Point(p)
        } else {
            IntersectionResult::None
        }
    };

    let result = match (type1, type2) {
        (Void, _) | (_, Void) => IntersectionResult::None,
        (Concave, _) | (_, Concave) => return Err(Error::UnsupportedShapeType(type1, type2)),
        (Point, Point) => point_if(pline1[0].fuzzy_eq_eps(pline2[0], eps), pline1[0]),
        (Point, Line | Path) => {
            point_if(point_on_path(pline2.points(), pline1[0], eps), pline1[0])
        }
        (Line | Path, Point) => {
            point_if(point_on_path(pline1.points(), pline2[0], eps), pline2[0])
        }
        (Point, Convex) => {
            point_if(point_in_convex(pline2.points(), pline1[0], eps), pline1[0])
        }
        (Convex, Point) => {
            point_if(point_in_convex(pline1.points(), pline2[0], eps), pline2[0])
        }
        (Line, Line) => line_line(pline1, pline2, options),
        (Line | Path, Line | Path) => path_path(pline1, pline2, options)?,
        (Convex, Line) => convex_line(pline1, pline2, options),
        (Line, Convex) => convex_line(pline2, pline1, options),
        (Convex, Path) => convex_path(pline1, pline2, options)?,
        (Path, Convex) => convex_path(pline2, pline1, options)?,
        (Convex, Convex) => convex_convex(pline1, pline2, options),
    };

    Ok(result)
}
