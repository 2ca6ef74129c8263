use polyline2d::{pline_closed, pline_open, polyline::Polyline};

fn main() {
    env_logger::init();
    adjust_segments();
    enclosed_rectangles();
}

fn adjust_segments() {
    println!("Moving segments...");

    let mut trapezoid: Polyline = pline_closed![(0.0, 0.0), (8.0, 0.0), (6.0, 4.0), (2.0, 4.0)];
    println!("  start: {trapezoid}");

    // positive offsets move a segment to its left, here into the shape
    if trapezoid.adjust_segment(0, 1.0) {
        println!("  bottom moved up: {trapezoid}");
    }

    // too far, the slanted side is not long enough
    let moved = trapezoid.adjust_segment(2, 10.0);
    println!("  top moved down by 10: {moved}");
    log::info!("trapezoid after edits: {trapezoid}");
}

fn enclosed_rectangles() {
    println!("Finding enclosed rectangles...");

    let hexagon: Polyline = pline_closed![
        (2.0, 0.0),
        (6.0, 0.0),
        (8.0, 3.0),
        (6.0, 6.0),
        (2.0, 6.0),
        (0.0, 3.0),
    ];
    match hexagon.enclosed_rectangle() {
        Ok(rect) => println!(
            "  hexagon: ({:.3}, {:.3}) to ({:.3}, {:.3})",
            rect.min_x, rect.min_y, rect.max_x, rect.max_y
        ),
        Err(e) => println!("  hexagon: {e}"),
    }

    let path: Polyline = pline_open![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)];
    if let Err(e) = path.enclosed_rectangle() {
        println!("  open path: {e}");
    }
}
