use polyline2d::{core::math::Vector2, core::traits::Real, polyline::Polyline};

/// Closed convex polygon with `vertex_count` corners on a circle of radius 40 around `center`.
pub fn circle_polygon<T>(vertex_count: usize, center: Vector2<T>) -> Polyline<T>
where
    T: Real,
{
    let radius = T::from(40.0).unwrap();
    let mut result = Polyline::with_capacity(vertex_count + 1);

    for i in 0..vertex_count {
        let angle = T::from(i).unwrap() * T::from(std::f64::consts::TAU).unwrap()
            / T::from(vertex_count).unwrap();
        result.append(center.x + radius * angle.cos(), center.y + radius * angle.sin());
    }

    result.close();
    result
}

/// Open zig zag path with `vertex_count` points crossing the x axis at every segment.
pub fn zig_zag<T>(vertex_count: usize) -> Polyline<T>
where
    T: Real,
{
    let step = T::from(100.0).unwrap() / T::from(vertex_count).unwrap();
    let amplitude = T::from(10.0).unwrap();
    let start = T::from(-50.0).unwrap();

    (0..vertex_count)
        .map(|i| {
            let x = start + step * T::from(i).unwrap();
            let y = if i % 2 == 0 { amplitude } else { -amplitude };
            Vector2::new(x, y)
        })
        .collect()
}
