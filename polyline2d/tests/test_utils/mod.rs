#![allow(dead_code)]

use polyline2d::{
    core::{math::Vector2, traits::FuzzyEq},
    polyline::{IntersectionResult, Polyline},
    AABB,
};

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Distinct points of `points` (within `eps`), in first seen order.
pub fn distinct_points(points: &[Vector2<f64>], eps: f64) -> Vec<Vector2<f64>> {
    let mut result: Vec<Vector2<f64>> = Vec::new();
    for p in points {
        if !result.iter().any(|q| q.fuzzy_eq_eps(*p, eps)) {
            result.push(*p);
        }
    }
    result
}

/// Returns true if both point lists hold the same set of distinct points, ignoring order and
/// repetition.
pub fn point_sets_match(a: &[Vector2<f64>], b: &[Vector2<f64>], eps: f64) -> bool {
    let a = distinct_points(a, eps);
    let b = distinct_points(b, eps);
    a.len() == b.len() && a.iter().all(|p| b.iter().any(|q| q.fuzzy_eq_eps(*p, eps)))
}

/// All points of an intersection result.
pub fn result_points(result: &IntersectionResult<f64>) -> Vec<Vector2<f64>> {
    match result {
        IntersectionResult::None => Vec::new(),
        IntersectionResult::Point(p) => vec![*p],
        IntersectionResult::Segment(p0, p1) => vec![*p0, *p1],
        IntersectionResult::Polyline(pl) => pl.points().to_vec(),
    }
}

/// Translate all points of `pline` by `(dx, dy)`.
pub fn translated(pline: &Polyline<f64>, dx: f64, dy: f64) -> Polyline<f64> {
    pline
        .points()
        .iter()
        .map(|p| Vector2::new(p.x + dx, p.y + dy))
        .collect()
}

/// Rotate all points of `pline` by `angle` (radians) around the origin.
pub fn rotated(pline: &Polyline<f64>, angle: f64) -> Polyline<f64> {
    let (sin, cos) = angle.sin_cos();
    pline
        .points()
        .iter()
        .map(|p| Vector2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos))
        .collect()
}

/// Closed regular polygon with `sides` corners on the circle of `radius` around `center`.
pub fn regular_polygon(
    center: Vector2<f64>,
    radius: f64,
    sides: usize,
    start_angle: f64,
) -> Polyline<f64> {
    let mut result = Polyline::with_capacity(sides + 1);
    for i in 0..sides {
        let angle = start_angle + std::f64::consts::TAU * (i as f64) / (sides as f64);
        result.append(center.x + radius * angle.cos(), center.y + radius * angle.sin());
    }
    result.close();
    result
}
