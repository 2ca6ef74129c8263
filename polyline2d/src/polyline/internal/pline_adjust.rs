//! Perpendicular segment adjustment.
use crate::core::{math::Vector2, traits::Real};

/// Offsets smaller than this are ignored.
const MIN_ADJUSTMENT: f64 = 1e-3;
/// Segments (and neighbouring segments) shorter than this cannot be adjusted.
const MIN_SEG_LENGTH: f64 = 1e-3;
/// Corners with a cosine beyond this are too close to 0 or 180 degrees to adjust.
const MAX_CORNER_COS: f64 = 0.999;

/// Move the end point `corner` of the segment with unit direction `base_dir` along the neighbouring
/// segment towards `neighbour`, so the segment line shifts by `offset` to its left.
///
/// Returns `None` if the neighbouring segment is too short, the corner angle is degenerate or the
/// shift would move the point past `neighbour`.
fn slide_along_neighbour<T>(
    corner: Vector2<T>,
    neighbour: Vector2<T>,
    base_dir: Vector2<T>,
    offset: T,
) -> Option<Vector2<T>>
where
    T: Real,
{
    let v = neighbour - corner;
    let length = v.length();
    if length < T::from_f64_const(MIN_SEG_LENGTH) {
        return None;
    }

    let dir = v.scale(T::one() / length);
    let cos = dir.dot(base_dir);
    let max_cos = T::from_f64_const(MAX_CORNER_COS);
    if cos < -max_cos || cos > max_cos {
        return None;
    }

    let sin_squared = T::one() - cos * cos;
    let mut dist = (offset * offset / sin_squared).sqrt();
    if dist > length {
        return None;
    }

    // slide towards the neighbour when it is on the side the segment moves to
    let cross = dir.perp_dot(base_dir);
    if (cross < -T::from_f64_const(MIN_ADJUSTMENT)) ^ (offset > T::zero()) {
        dist = -dist;
    }

    Some(corner + dir.scale(dist))
}

/// Move the segment of `points` starting at `index` perpendicular to its direction by `offset`
/// (positive to the left), keeping neighbouring segment directions.
///
/// End points without a neighbouring segment move straight along the segment normal. When
/// `closed` is true the segments wrap around and the first and last points are kept equal.
/// Returns false, leaving `points` unchanged, if the adjustment is not possible.
pub fn adjust_segment<T>(points: &mut [Vector2<T>], closed: bool, index: usize, offset: T) -> bool
where
    T: Real,
{
    let len = points.len();
    if len < 2 || index >= len - 1 {
        return false;
    }

    if offset.abs() < T::from_f64_const(MIN_ADJUSTMENT) {
        return true;
    }

    let max_index = len - 1;
    let end_index = index + 1;
    let start = points[index];
    let end = points[end_index];

    let prev = if index > 0 {
        Some(points[index - 1])
    } else if closed {
        Some(points[max_index - 1])
    } else {
        None
    };

    let next = if end_index < max_index {
        Some(points[end_index + 1])
    } else if closed {
        Some(points[1])
    } else {
        None
    };

    let base = end - start;
    let base_length = base.length();
    if base_length < T::from_f64_const(MIN_SEG_LENGTH) {
        return false;
    }

    let base_dir = base.scale(T::one() / base_length);
    let normal_shift = base_dir.perp().scale(offset);

    let new_start = match prev {
        Some(prev) => match slide_along_neighbour(start, prev, base_dir, offset) {
            Some(p) => p,
            None => return false,
        },
        None => start + normal_shift,
    };

    let new_end = match next {
        Some(next) => match slide_along_neighbour(end, next, base_dir, offset) {
            Some(p) => p,
            None => return false,
        },
        None => end + normal_shift,
    };

    points[index] = new_start;
    points[end_index] = new_end;

    if closed {
        if index == 0 {
            points[max_index] = new_start;
        }
        if end_index == max_index {
            points[0] = new_end;
        }
    }

    true
}
