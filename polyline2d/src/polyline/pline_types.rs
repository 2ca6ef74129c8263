//! Supporting public types used by the polyline query methods.

use super::Polyline;
use crate::core::{
    math::{seg_intersect, SegIntr, Vector2},
    traits::Real,
};
use std::cell::Cell;

/// Default epsilon used for deciding if two positions are equal.
pub const DEFAULT_POS_EQUAL_EPS: f64 = 1e-4;
/// Default epsilon used by the segment intersector.
pub const DEFAULT_SEG_INTR_EPS: f64 = 1e-5;
/// Default epsilon used for joining fragment end points when stitching.
pub const DEFAULT_STITCH_JOIN_EPS: f64 = 1e-2;

/// Counters collected while running intersection queries.
///
/// Pass a reference through [IntersectOptions::stats] to observe how much work a query did.
#[derive(Debug, Default)]
pub struct IntersectStats {
    segment_tests: Cell<usize>,
}

impl IntersectStats {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of segment/segment intersect tests run.
    #[inline]
    pub fn segment_tests(&self) -> usize {
        self.segment_tests.get()
    }

    #[inline]
    pub fn reset(&self) {
        self.segment_tests.set(0);
    }

    #[inline]
    pub(crate) fn record_segment_test(&self) {
        self.segment_tests.set(self.segment_tests.get() + 1);
    }
}

/// Struct to hold options parameters when performing polyline intersection queries.
///
/// `pos_equal_eps` is the base tolerance and is an absolute distance. The defaults keep
/// `seg_intr_eps` one tenth of it and `stitch_join_eps` one hundred times it:
/// * `seg_intr_eps` is compared against the sine of the angle between two segments, the
///   distance of a segment from another segment's line and parametric values. It is kept
///   tighter so segments the intersector calls collinear are well inside what position
///   comparisons treat as equal.
/// * `stitch_join_eps` only decides which fragment end points belong to the same chain, and
///   fragments come from exact shared end points or segment intersects, so it is looser.
///
/// [IntersectOptions::with_pos_equal_eps] builds options keeping these ratios for inputs at a
/// different scale.
#[derive(Debug, Clone)]
pub struct IntersectOptions<'a, T>
where
    T: Real,
{
    /// Fuzzy comparison epsilon used for determining if two positions are equal.
    pub pos_equal_eps: T,
    /// Fuzzy comparison epsilon used by the segment intersector for the parallel, collinear and
    /// parametric bounds tests.
    pub seg_intr_eps: T,
    /// Fuzzy comparison epsilon used for joining fragment end points when stitching the result.
    pub stitch_join_eps: T,
    /// Optional counters updated while the query runs.
    pub stats: Option<&'a IntersectStats>,
}

impl<'a, T> IntersectOptions<'a, T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from_f64_const(DEFAULT_POS_EQUAL_EPS),
            seg_intr_eps: T::from_f64_const(DEFAULT_SEG_INTR_EPS),
            stitch_join_eps: T::from_f64_const(DEFAULT_STITCH_JOIN_EPS),
            stats: None,
        }
    }

    /// Options for a given position tolerance, deriving the other epsilons from it with the same
    /// ratios as the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyline2d::polyline::*;
    /// # use polyline2d::core::traits::*;
    /// let options = IntersectOptions::<f64>::with_pos_equal_eps(1e-7);
    /// assert!(options.seg_intr_eps.fuzzy_eq_eps(1e-8, 1e-12));
    /// assert!(options.stitch_join_eps.fuzzy_eq_eps(1e-5, 1e-12));
    /// ```
    #[inline]
    pub fn with_pos_equal_eps(pos_equal_eps: T) -> Self {
        let seg_ratio = T::from_f64_const(DEFAULT_SEG_INTR_EPS / DEFAULT_POS_EQUAL_EPS);
        let join_ratio = T::from_f64_const(DEFAULT_STITCH_JOIN_EPS / DEFAULT_POS_EQUAL_EPS);
        Self {
            pos_equal_eps,
            seg_intr_eps: pos_equal_eps * seg_ratio,
            stitch_join_eps: pos_equal_eps * join_ratio,
            stats: None,
        }
    }

    /// Run the segment intersector with the configured epsilon, recording the test in
    /// [IntersectOptions::stats] when present.
    #[inline]
    pub(crate) fn seg_intersect(
        &self,
        p1: Vector2<T>,
        p2: Vector2<T>,
        p3: Vector2<T>,
        p4: Vector2<T>,
    ) -> SegIntr<T> {
        if let Some(stats) = self.stats {
            stats.record_segment_test();
        }
        seg_intersect(p1, p2, p3, p4, self.seg_intr_eps)
    }
}

impl<'a, T> Default for IntersectOptions<'a, T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Result of intersecting two polylines. A query yields at most one connected result.
#[derive(Debug, Clone, PartialEq)]
pub enum IntersectionResult<T = f64>
where
    T: Real,
{
    /// The shapes do not intersect.
    None,
    /// The shapes meet at a single point.
    Point(Vector2<T>),
    /// The shapes share a single line segment.
    Segment(Vector2<T>, Vector2<T>),
    /// The shapes share a path or an area, given as a polyline (closed for areas).
    Polyline(Polyline<T>),
}

impl<T> IntersectionResult<T>
where
    T: Real,
{
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, IntersectionResult::None)
    }

    /// Convert the result to a polyline (empty for [IntersectionResult::None]).
    pub fn into_polyline(self) -> Polyline<T> {
        match self {
            IntersectionResult::None => Polyline::new(),
            IntersectionResult::Point(p) => Polyline::from_points([p]),
            IntersectionResult::Segment(p0, p1) => Polyline::from_points([p0, p1]),
            IntersectionResult::Polyline(pl) => pl,
        }
    }
}

/// Piece of an intersection result, stitched together into a single chain.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Fragment<T = f64>
where
    T: Real,
{
    Point(Vector2<T>),
    Segment(Vector2<T>, Vector2<T>),
}

impl<T> Fragment<T>
where
    T: Real,
{
    /// First point of the fragment.
    #[inline]
    pub fn head(&self) -> Vector2<T> {
        match *self {
            Fragment::Point(p) => p,
            Fragment::Segment(p0, _) => p0,
        }
    }

    /// Last point of the fragment.
    #[inline]
    pub fn tail(&self) -> Vector2<T> {
        match *self {
            Fragment::Point(p) => p,
            Fragment::Segment(_, p1) => p1,
        }
    }

    /// Fragment for a segment intersect result, `None` if there was no intersect.
    #[inline]
    pub fn from_seg_intr(intr: SegIntr<T>) -> Option<Self> {
        match intr {
            SegIntr::NoIntersect => None,
            SegIntr::Point(p) => Some(Fragment::Point(p)),
            SegIntr::Overlapping(p0, p1) => Some(Fragment::Segment(p0, p1)),
        }
    }
}

/// Result of stitching fragments together head to tail.
#[derive(Debug, Clone, PartialEq)]
pub enum StitchResult<T = f64>
where
    T: Real,
{
    /// All fragments joined and the chain end returned to its start.
    Closed(Polyline<T>),
    /// All fragments joined into an open chain.
    Open(Polyline<T>),
    /// Some fragments could not be joined to the chain.
    Partial {
        chain: Polyline<T>,
        unmatched: Vec<Fragment<T>>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{math::vec2, traits::FuzzyEq};

    #[test]
    fn fragment_ends() {
        let p = vec2(1.0, 2.0);
        let point = Fragment::Point(p);
        assert_eq!(point.head(), p);
        assert_eq!(point.tail(), p);

        let seg = Fragment::Segment(vec2(0.0, 0.0), vec2(3.0, 4.0));
        assert_eq!(seg.head(), vec2(0.0, 0.0));
        assert_eq!(seg.tail(), vec2(3.0, 4.0));
    }

    #[test]
    fn fragment_from_seg_intr() {
        assert_eq!(Fragment::<f64>::from_seg_intr(SegIntr::NoIntersect), None);
        assert_eq!(
            Fragment::from_seg_intr(SegIntr::Point(vec2(1.0, 1.0))),
            Some(Fragment::Point(vec2(1.0, 1.0)))
        );
        let frag = Fragment::from_seg_intr(SegIntr::Overlapping(vec2(0.0, 0.0), vec2(2.0, 0.0)));
        assert_eq!(frag.map(|f| f.tail()), Some(vec2(2.0, 0.0)));
    }

    #[test]
    fn derived_options_keep_default_ratios() {
        let defaults = IntersectOptions::<f64>::new();
        let derived = IntersectOptions::<f64>::with_pos_equal_eps(DEFAULT_POS_EQUAL_EPS);
        assert!(derived.seg_intr_eps.fuzzy_eq(defaults.seg_intr_eps));
        assert!(derived.stitch_join_eps.fuzzy_eq(defaults.stitch_join_eps));

        let fine = IntersectOptions::<f64>::with_pos_equal_eps(1e-7);
        assert!(fine.seg_intr_eps.fuzzy_eq_eps(1e-8, 1e-15));
        assert!(fine.stitch_join_eps.fuzzy_eq_eps(1e-5, 1e-15));
        assert!(fine.stats.is_none());
    }
}
