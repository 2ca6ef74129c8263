use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use polyline2d::{core::math::Vector2, polyline::Polyline};
mod test_polylines;
use test_polylines::*;

fn bench_is_intersecting(b: &mut Bencher, pline1: &Polyline<f64>, pline2: &Polyline<f64>) {
    b.iter(|| {
        let _ = pline1.is_intersecting(pline2);
    })
}

fn bench_intersection(b: &mut Bencher, pline1: &Polyline<f64>, pline2: &Polyline<f64>) {
    b.iter(|| {
        let _ = pline1.intersection(pline2);
    })
}

fn convex_convex_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_convex");
    let vertex_counts = &[25, 250, 2500];
    for &i in vertex_counts {
        let a = circle_polygon(i, Vector2::new(0.0, 0.0));
        let b = circle_polygon(i, Vector2::new(30.0, 5.0));
        // warm shape type and bounds caches
        let _ = a.shape_type();
        let _ = b.shape_type();
        group.bench_with_input(BenchmarkId::new("is_intersecting", i), &i, |bench, _| {
            bench_is_intersecting(bench, &a, &b)
        });
        group.bench_with_input(BenchmarkId::new("intersection", i), &i, |bench, _| {
            bench_intersection(bench, &a, &b)
        });
    }

    group.finish();
}

fn convex_path_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_path");
    let vertex_counts = &[25, 250, 2500];
    for &i in vertex_counts {
        let polygon = circle_polygon(i, Vector2::new(0.0, 0.0));
        let path = zig_zag(i);
        let _ = polygon.shape_type();
        let _ = path.shape_type();
        group.bench_with_input(BenchmarkId::new("is_intersecting", i), &i, |bench, _| {
            bench_is_intersecting(bench, &polygon, &path)
        });
    }

    group.finish();
}

fn path_path_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_path");
    let vertex_counts = &[25, 250, 2500];
    for &i in vertex_counts {
        let path1 = zig_zag(i);
        let path2: Polyline<f64> = path1
            .points()
            .iter()
            .map(|p| Vector2::new(p.x, p.y + 1000.0))
            .collect();
        let _ = path1.shape_type();
        let _ = path2.shape_type();
        group.bench_with_input(BenchmarkId::new("apart", i), &i, |bench, _| {
            bench_is_intersecting(bench, &path1, &path2)
        });
    }

    group.finish();
}

criterion_group!(
    polyline_intersect,
    convex_convex_group,
    convex_path_group,
    path_path_group,
);
criterion_main!(polyline_intersect);
