use polyline2d::{
    pline_closed, pline_open,
    polyline::{IntersectOptions, IntersectStats, IntersectionResult, Polyline},
    Error,
};

fn main() {
    env_logger::init();
    polygon_intersections();
    path_intersections();
    query_statistics();
}

fn describe(result: &IntersectionResult<f64>) -> String {
    match result {
        IntersectionResult::None => "no intersection".to_string(),
        IntersectionResult::Point(p) => format!("point {p}"),
        IntersectionResult::Segment(p0, p1) => format!("segment {p0} -> {p1}"),
        IntersectionResult::Polyline(pl) => format!("polyline {pl}"),
    }
}

fn polygon_intersections() {
    println!("Intersecting convex polygons...");

    let a = Polyline::rectangle(10.0, 10.0);
    let b: Polyline = pline_closed![(5.0, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0)];
    let overlap = a.intersection(&b).expect("both polygons are convex");
    println!("  overlapping squares: {}", describe(&overlap));

    let neighbour: Polyline = pline_closed![(10.0, 0.0), (20.0, 0.0), (20.0, 10.0), (10.0, 10.0)];
    let shared = a.intersection(&neighbour).expect("both polygons are convex");
    println!("  neighbouring squares: {}", describe(&shared));

    let inner: Polyline = pline_closed![(2.0, 2.0), (4.0, 2.0), (3.0, 4.0)];
    let nested = a.intersection(&inner).expect("both polygons are convex");
    println!("  nested triangle: {}", describe(&nested));

    let notched: Polyline = pline_closed![
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 4.0),
        (3.0, 2.0),
        (0.0, 4.0),
    ];
    match a.intersection(&notched) {
        Err(Error::UnsupportedShapeType(t1, t2)) => {
            println!("  {t1:?} with {t2:?} is not supported")
        }
        r => println!("  unexpected result {r:?}"),
    }
}

fn path_intersections() {
    println!("Intersecting paths...");

    let square = Polyline::rectangle(10.0, 10.0);
    let hook = pline_open![(-5.0, 2.0), (5.0, 2.0), (5.0, 20.0)];
    let clipped = square.intersection(&hook).expect("path enters the square once");
    println!("  hook clipped by square: {}", describe(&clipped));

    let zig_zag = pline_open![(-1.0, 2.0), (11.0, 2.0), (11.0, 8.0), (-1.0, 8.0)];
    assert!(square.is_intersecting(&zig_zag).unwrap_or(false));
    match square.intersection(&zig_zag) {
        Err(e) => println!("  zig zag: {e}"),
        Ok(r) => println!("  zig zag: {}", describe(&r)),
    }

    let line1 = pline_open![(0.0, 0.0), (10.0, 10.0)];
    let line2 = pline_open![(0.0, 10.0), (10.0, 0.0)];
    let crossing = line1.intersection(&line2).expect("lines are supported");
    println!("  crossing lines: {}", describe(&crossing));
}

fn query_statistics() {
    println!("Counting segment tests...");

    let stats = IntersectStats::new();
    let options = IntersectOptions {
        stats: Some(&stats),
        ..Default::default()
    };

    let a = Polyline::rectangle(10.0, 10.0);
    let far: Polyline = pline_closed![(50.0, 50.0), (60.0, 50.0), (55.0, 60.0)];
    let _ = a.is_intersecting_opt(&far, &options);
    println!("  far apart: {} segment tests", stats.segment_tests());

    stats.reset();
    let near: Polyline = pline_closed![(5.0, 5.0), (15.0, 5.0), (10.0, 15.0)];
    let _ = a.intersection_opt(&near, &options);
    println!("  overlapping: {} segment tests", stats.segment_tests());
}
