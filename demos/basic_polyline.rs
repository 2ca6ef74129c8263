use polyline2d::{
    core::math::Vector2,
    pline_closed, pline_open,
    polyline::{Polyline, ShapeType},
};

fn main() {
    env_logger::init();
    shape_types();
    text_format();
    point_queries();
}

fn shape_types() {
    println!("Classifying polylines...");

    let empty: Polyline = Polyline::new();
    assert_eq!(empty.shape_type(), ShapeType::Void);

    let point = pline_open![(1.0, 1.0)];
    assert_eq!(point.shape_type(), ShapeType::Point);

    let line = pline_open![(0.0, 0.0), (5.0, 5.0)];
    assert_eq!(line.shape_type(), ShapeType::Line);

    let path = pline_open![(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)];
    assert_eq!(path.shape_type(), ShapeType::Path);

    let triangle = pline_closed![(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)];
    assert_eq!(triangle.shape_type(), ShapeType::Convex);

    // notch cut into the top edge
    let notched = pline_closed![
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 4.0),
        (3.0, 2.0),
        (0.0, 4.0),
    ];
    assert_eq!(notched.shape_type(), ShapeType::Concave);

    for pline in [&empty, &point, &line, &path, &triangle, &notched] {
        println!(
            "  {:?} with {} points, closed: {}",
            pline.shape_type(),
            pline.len(),
            pline.is_closed()
        );
    }
}

fn text_format() {
    println!("Reading and writing the text format...");

    let rect = Polyline::rectangle(20.0, 10.0);
    let text = rect.to_string();
    println!("  rectangle: {text}");

    let parsed: Polyline = text.parse().expect("rectangle text should parse");
    assert_eq!(parsed, rect);
    assert!(parsed.is_rectangle());

    match "1,2|3".parse::<Polyline>() {
        Ok(p) => println!("  unexpected parse result {p}"),
        Err(e) => println!("  malformed input rejected: {e}"),
    }
}

fn point_queries() {
    println!("Querying points and bounds...");

    let triangle = pline_closed![(0.0, 0.0), (8.0, 0.0), (4.0, 6.0)];
    let bounds = triangle.bounds().expect("triangle is not empty");
    println!(
        "  bounds ({}, {}) to ({}, {}), width {} height {}",
        bounds.min_x,
        bounds.min_y,
        bounds.max_x,
        bounds.max_y,
        triangle.width(),
        triangle.height()
    );

    for p in [Vector2::new(4.0, 2.0), Vector2::new(4.0, 0.0), Vector2::new(7.0, 5.0)] {
        println!("  contains {p}: {}", triangle.contains_point(p));
    }

    for (i, (p0, p1)) in triangle.iter_segments().enumerate() {
        let length = triangle.segment_length(i).expect("segment index in range");
        println!("  segment {i}: {p0} -> {p1}, length {length:.3}");
    }
}
