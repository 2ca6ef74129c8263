use polyline2d::{
    core::math::Vector2,
    pline_closed, pline_open,
    polyline::{Polyline, ShapeType},
};

#[test]
fn point_counts() {
    let mut polyline: Polyline = Polyline::new();
    assert_eq!(polyline.shape_type(), ShapeType::Void);
    polyline.append(1.0, 2.0);
    assert_eq!(polyline.shape_type(), ShapeType::Point);
    polyline.append(3.0, 4.0);
    assert_eq!(polyline.shape_type(), ShapeType::Line);
    polyline.append(3.0, 8.0);
    assert_eq!(polyline.shape_type(), ShapeType::Path);
    polyline.close();
    assert_eq!(polyline.shape_type(), ShapeType::Convex);
    polyline.clear();
    assert_eq!(polyline.shape_type(), ShapeType::Void);
}

#[test]
fn repeated_point_is_point() {
    let polyline = pline_open![(5.0, 5.0), (5.0, 5.0), (5.0, 5.00001)];
    assert_eq!(polyline.shape_type(), ShapeType::Point);
}

#[test]
fn unit_square_both_orientations() {
    let ccw = pline_closed![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let cw = pline_closed![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
    assert_eq!(ccw.shape_type(), ShapeType::Convex);
    assert_eq!(cw.shape_type(), ShapeType::Convex);
    assert_eq!(ccw.reversed().shape_type(), ShapeType::Convex);
}

#[test]
fn dart_is_concave() {
    let dart = pline_closed![(0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (2.0, 4.0)];
    assert_eq!(dart.shape_type(), ShapeType::Concave);
    assert_eq!(dart.reversed().shape_type(), ShapeType::Concave);
}

#[test]
fn dart_starting_at_reflex_vertex_is_concave() {
    let dart = pline_closed![(2.0, 1.0), (4.0, 0.0), (2.0, 4.0), (0.0, 0.0)];
    assert_eq!(dart.shape_type(), ShapeType::Concave);
}

#[test]
fn redundant_collinear_vertex_stays_convex() {
    let rect = pline_closed![(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 5.0), (0.0, 5.0)];
    assert_eq!(rect.shape_type(), ShapeType::Convex);
}

#[test]
fn closed_back_and_forth_is_path() {
    let polyline = pline_closed![(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)];
    assert_eq!(polyline.len(), 4);
    assert_eq!(polyline.shape_type(), ShapeType::Path);
}

#[test]
fn almost_closed_counts_as_closed() {
    let mut polyline = pline_open![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)];
    polyline.append(0.00001, -0.00001);
    assert!(polyline.is_closed());
    assert_eq!(polyline.shape_type(), ShapeType::Convex);

    // closing again does nothing
    polyline.close();
    assert_eq!(polyline.len(), 4);
}

#[test]
fn translation_keeps_classification() {
    let dart = [(0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (2.0, 4.0), (0.0, 0.0)];
    for offset in [-1000.0, 0.5, 2048.0] {
        let moved: Polyline = dart
            .iter()
            .map(|&(x, y)| Vector2::new(x + offset, y - offset))
            .collect();
        assert_eq!(moved.shape_type(), ShapeType::Concave);
    }
}

#[test]
fn cache_is_reset_by_mutation() {
    let mut polyline = pline_closed![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    assert_eq!(polyline.shape_type(), ShapeType::Convex);
    polyline.append(2.0, 2.0);
    assert_eq!(polyline.shape_type(), ShapeType::Path);
}

#[test]
fn only_closed_shapes_are_polygons() {
    let dart = pline_closed![(0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (2.0, 4.0)];
    let square = pline_closed![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let path = pline_open![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
    assert!(dart.shape_type().is_polygon());
    assert!(square.shape_type().is_polygon());
    assert!(!path.shape_type().is_polygon());
    assert!(!ShapeType::Void.is_polygon());
    assert!(!ShapeType::Point.is_polygon());
    assert!(!ShapeType::Line.is_polygon());
}
