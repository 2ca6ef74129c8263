use super::{
    classify,
    internal::{pline_adjust, pline_contains, pline_enclosed_rect, shape_intersect},
    points_closed, IntersectOptions, IntersectionResult, ShapeType, DEFAULT_POS_EQUAL_EPS,
};
use crate::{
    core::{
        math::{vec2, Vector2},
        traits::Real,
    },
    Error, Result,
};
use static_aabb2d_index::AABB;
use std::{
    fmt,
    ops::Index,
    str::FromStr,
    sync::OnceLock,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point type used by polylines.
pub type Point<T = f64> = Vector2<T>;

/// Ordered sequence of points describing a point, line, path or polygon.
///
/// A polyline is closed when it has at least 3 points and the last point equals the first point
/// (see [Polyline::close]). Shape type, bounds and enclosed rectangle are computed lazily and
/// cached until the next mutation, so a polyline can be queried by reference from several threads.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Polyline<T = f64> {
    points: Vec<Vector2<T>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    shape_type: OnceLock<ShapeType>,
    #[cfg_attr(feature = "serde", serde(skip))]
    bounds: OnceLock<Option<AABB<T>>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    enclosed_rect: OnceLock<Option<AABB<T>>>,
}

impl<T> Default for Polyline<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Polyline<T>
where
    T: Real,
{
    /// Create a new empty [Polyline].
    #[inline]
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create a new empty [Polyline] with reserved capacity for `capacity` points.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(Vec::with_capacity(capacity))
    }

    /// Create a [Polyline] holding the `points` given, in order.
    #[inline]
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector2<T>>,
    {
        Self::from_vec(points.into_iter().collect())
    }

    fn from_vec(points: Vec<Vector2<T>>) -> Self {
        Polyline {
            points,
            shape_type: OnceLock::new(),
            bounds: OnceLock::new(),
            enclosed_rect: OnceLock::new(),
        }
    }

    /// Create an axis aligned rectangle with one corner at the origin and the opposite corner at
    /// `(dx, dy)`.
    ///
    /// The result is closed when both `dx` and `dy` are nonzero, a line when only one of them is
    /// zero and a single point when both are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyline2d::polyline::*;
    /// let rect = Polyline::rectangle(123.0, 456.0);
    /// assert_eq!(rect.len(), 5);
    /// assert!(rect.is_closed());
    /// assert_eq!(rect.shape_type(), ShapeType::Convex);
    /// assert_eq!(Polyline::rectangle(123.0, 0.0).shape_type(), ShapeType::Line);
    /// assert_eq!(Polyline::rectangle(0.0, 0.0).shape_type(), ShapeType::Point);
    /// ```
    pub fn rectangle(dx: T, dy: T) -> Self {
        let zero = T::zero();
        let mut result = Self::with_capacity(5);
        result.append(zero, zero);
        match (dx == zero, dy == zero) {
            (true, true) => {}
            (false, false) => {
                result.append(dx, zero);
                result.append(dx, dy);
                result.append(zero, dy);
                result.close();
            }
            _ => result.append(dx, dy),
        }
        result
    }

    /// Drop all cached values, called on every mutation.
    fn invalidate(&mut self) {
        self.shape_type.take();
        self.bounds.take();
        self.enclosed_rect.take();
    }

    /// Add a point to the end of the polyline.
    #[inline]
    pub fn append(&mut self, x: T, y: T) {
        self.append_point(vec2(x, y));
    }

    /// Add a point to the end of the polyline.
    #[inline]
    pub fn append_point(&mut self, point: Vector2<T>) {
        self.points.push(point);
        self.invalidate();
    }

    /// Close the polyline by appending a copy of its first point.
    ///
    /// Does nothing if there are fewer than 3 points or the polyline is already closed.
    pub fn close(&mut self) {
        if self.points.len() >= 3 && !self.is_closed() {
            let first = self.points[0];
            self.append_point(first);
        }
    }

    /// Remove all points.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
        self.invalidate();
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points as a slice.
    #[inline]
    pub fn points(&self) -> &[Vector2<T>] {
        &self.points
    }

    /// Point at `index`, [Error::IndexOutOfRange] if there is no such point.
    #[inline]
    pub fn point(&self, index: usize) -> Result<Point<T>> {
        self.points
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    #[inline]
    pub fn first(&self) -> Option<Point<T>> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Point<T>> {
        self.points.last().copied()
    }

    /// Number of segments (`len() - 1`, or zero for an empty polyline).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Iterate over the segments as `(start, end)` point pairs.
    #[inline]
    pub fn iter_segments(&self) -> impl Iterator<Item = (Point<T>, Point<T>)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Length of the segment starting at point `index`.
    pub fn segment_length(&self, index: usize) -> Result<T> {
        if index >= self.segment_count() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }

        Ok((self.points[index + 1] - self.points[index]).length())
    }

    /// Returns true if the polyline has at least 3 points and its last point equals its first.
    #[inline]
    pub fn is_closed(&self) -> bool {
        points_closed(&self.points, T::from_f64_const(DEFAULT_POS_EQUAL_EPS))
    }

    /// Shape classification of the polyline (cached).
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        *self
            .shape_type
            .get_or_init(|| classify(&self.points, T::from_f64_const(DEFAULT_POS_EQUAL_EPS)))
    }

    /// Axis aligned bounding box of all the points (cached), `None` if the polyline is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyline2d::core::traits::*;
    /// # use polyline2d::polyline::*;
    /// let mut polyline: Polyline = Polyline::new();
    /// assert!(polyline.bounds().is_none());
    /// polyline.append(1.0, 5.0);
    /// polyline.append(3.0, -2.0);
    /// let bounds = polyline.bounds().unwrap();
    /// assert!(bounds.min_x.fuzzy_eq(1.0));
    /// assert!(bounds.min_y.fuzzy_eq(-2.0));
    /// assert!(bounds.max_x.fuzzy_eq(3.0));
    /// assert!(bounds.max_y.fuzzy_eq(5.0));
    /// ```
    pub fn bounds(&self) -> Option<AABB<T>> {
        *self.bounds.get_or_init(|| {
            let first = self.points.first()?;
            let mut result = AABB::new(first.x, first.y, first.x, first.y);
            for p in &self.points[1..] {
                if p.x < result.min_x {
                    result.min_x = p.x;
                } else if p.x > result.max_x {
                    result.max_x = p.x;
                }

                if p.y < result.min_y {
                    result.min_y = p.y;
                } else if p.y > result.max_y {
                    result.max_y = p.y;
                }
            }
            Some(result)
        })
    }

    /// Width of the bounding box (zero if empty).
    #[inline]
    pub fn width(&self) -> T {
        self.bounds()
            .map_or_else(T::zero, |b| b.max_x - b.min_x)
    }

    /// Height of the bounding box (zero if empty).
    #[inline]
    pub fn height(&self) -> T {
        self.bounds()
            .map_or_else(T::zero, |b| b.max_y - b.min_y)
    }

    /// Returns true if `point` is on or inside the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyline2d::core::math::*;
    /// # use polyline2d::polyline::*;
    /// let rect = Polyline::rectangle(4.0, 2.0);
    /// assert!(rect.contains_point(Vector2::new(1.0, 1.0)));
    /// assert!(rect.contains_point(Vector2::new(4.0, 1.0)));
    /// assert!(!rect.contains_point(Vector2::new(5.0, 1.0)));
    /// ```
    pub fn contains_point(&self, point: Point<T>) -> bool {
        let eps = T::from_f64_const(DEFAULT_POS_EQUAL_EPS);
        match self.shape_type() {
            ShapeType::Void => false,
            ShapeType::Point => self.points[0].fuzzy_eq_eps(point, eps),
            ShapeType::Line | ShapeType::Path => {
                pline_contains::point_on_path(&self.points, point, eps)
            }
            ShapeType::Convex => pline_contains::point_in_convex(&self.points, point, eps),
            ShapeType::Concave => {
                pline_contains::point_on_path(&self.points, point, eps)
                    || pline_contains::winding_number(&self.points, point) != 0
            }
        }
    }

    /// Returns true if the polyline is an (approximate) rectangle: 5 points, closed, and every
    /// corner close to 90 degrees. The rectangle does not need to be axis aligned.
    pub fn is_rectangle(&self) -> bool {
        if self.points.len() != 5 || !self.shape_type().is_polygon() {
            return false;
        }

        let max_cos = T::from_f64_const(0.1);
        (0..4).all(|i| {
            let corner = self.points[i + 1];
            let incoming = self.points[i] - corner;
            let outgoing = self.points[(i + 2) % 4] - corner;
            let lengths = incoming.length() * outgoing.length();
            if lengths == T::zero() {
                return false;
            }
            (incoming.dot(outgoing) / lengths).abs() < max_cos
        })
    }

    /// Returns a new polyline with the same points in reverse order.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::from_points(self.points.iter().rev().copied())
    }

    /// Returns true if this polyline and `other` share at least one point.
    ///
    /// Fails with [Error::UnsupportedShapeType] if either polyline is concave.
    #[inline]
    pub fn is_intersecting(&self, other: &Polyline<T>) -> Result<bool> {
        self.is_intersecting_opt(other, &Default::default())
    }

    /// Same as [Polyline::is_intersecting] with options given.
    #[inline]
    pub fn is_intersecting_opt(
        &self,
        other: &Polyline<T>,
        options: &IntersectOptions<T>,
    ) -> Result<bool> {
        shape_intersect::is_intersecting(self, other, options)
    }

    /// Compute the intersection of this polyline and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyline2d::core::math::*;
    /// # use polyline2d::polyline::*;
    /// let a = Polyline::rectangle(4.0, 4.0);
    /// let mut line = Polyline::new();
    /// line.append(-1.0, 2.0);
    /// line.append(5.0, 2.0);
    /// match a.intersection(&line).unwrap() {
    ///     IntersectionResult::Segment(p0, p1) => {
    ///         assert!(p0.fuzzy_eq(Vector2::new(0.0, 2.0)));
    ///         assert!(p1.fuzzy_eq(Vector2::new(4.0, 2.0)));
    ///     }
    ///     r => unreachable!("expected segment, got {:?}", r),
    /// }
    /// ```
    #[inline]
    pub fn intersection(&self, other: &Polyline<T>) -> Result<IntersectionResult<T>> {
        self.intersection_opt(other, &Default::default())
    }

    /// Same as [Polyline::intersection] with options given.
    #[inline]
    pub fn intersection_opt(
        &self,
        other: &Polyline<T>,
        options: &IntersectOptions<T>,
    ) -> Result<IntersectionResult<T>> {
        shape_intersect::intersection(self, other, options)
    }

    /// Move the segment starting at point `index` perpendicular to its direction by `offset`.
    ///
    /// Positive offsets move the segment to its left. The neighbouring segments keep their
    /// direction, the shared points slide along them. Returns false (leaving the polyline
    /// unchanged) if `index` is not a segment, the segment has zero length, an adjacent corner is
    /// too close to 0 or 180 degrees, or the move would go past the end of a neighbouring segment.
    /// Offsets smaller than `1e-3` are ignored and return true.
    pub fn adjust_segment(&mut self, index: usize, offset: T) -> bool {
        let closed = self.is_closed();
        let adjusted = pline_adjust::adjust_segment(&mut self.points, closed, index, offset);
        if adjusted {
            self.invalidate();
        }
        adjusted
    }

    /// Find an axis aligned rectangle inside this convex polygon (cached).
    ///
    /// Starts from the bounding box and moves in sides whose corners are outside the polygon by a
    /// thirtieth of the extent per step. Fails with [Error::NotConvex] for other shape types and
    /// [Error::NoEnclosedRectangle] if the search collapses.
    pub fn enclosed_rectangle(&self) -> Result<AABB<T>> {
        let shape_type = self.shape_type();
        if shape_type != ShapeType::Convex {
            return Err(Error::NotConvex(shape_type));
        }

        let found = *self.enclosed_rect.get_or_init(|| {
            self.bounds().and_then(|bounds| {
                pline_enclosed_rect::find_enclosed_rect(
                    &self.points,
                    bounds,
                    T::from_f64_const(DEFAULT_POS_EQUAL_EPS),
                )
            })
        });

        found.ok_or(Error::NoEnclosedRectangle)
    }
}

impl<T> PartialEq for Polyline<T>
where
    T: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<T> Index<usize> for Polyline<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> FromIterator<Vector2<T>> for Polyline<T>
where
    T: Real,
{
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

/// Writes the points as `x,y` pairs separated by `|`, e.g. `"0,0|10,0|10,5"`.
impl<T> fmt::Display for Polyline<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}

/// Parses the form written by `Display`. An empty (or all whitespace) string gives an empty
/// polyline.
impl<T> FromStr for Polyline<T>
where
    T: Real + FromStr,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::new());
        }

        let mut result = Self::new();
        for point_str in s.split('|') {
            let mut parts = point_str.split(',');
            let (Some(x_str), Some(y_str), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(Error::Parse(format!(
                    "expected 'x,y' point, found '{}'",
                    point_str.trim()
                )));
            };

            let parse = |v: &str| {
                v.trim()
                    .parse::<T>()
                    .map_err(|_| Error::Parse(format!("invalid coordinate '{}'", v.trim())))
            };

            result.points.push(vec2(parse(x_str)?, parse(y_str)?));
        }

        Ok(result)
    }
}
