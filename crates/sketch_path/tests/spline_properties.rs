use sketch_path::{rasterize_spline, Point, Spline, SplineOptions};

#[test]
fn zero_tension_between_two_points_is_a_straight_segment() {
    let a = Point::new(3.0, -2.0);
    let b = Point::new(43.0, 28.0);
    let pts = [a, b];
    let spline = rasterize_spline(&pts, 0.0, false).unwrap();
    let dir = b - a;
    for p in &spline {
        let rel = p - a;
        let cross = dir.x * rel.y - dir.y * rel.x;
        assert!(cross.abs() < 1e-3, "{p:?} is off the segment");
        assert!(rel.x >= -1e-4 && rel.x <= dir.x + 1e-4);
    }
}

#[test]
fn closed_square_is_a_continuous_loop() {
    let spline = Spline::from_flat(
        &[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0],
        SplineOptions::new(0.5, true),
    )
    .unwrap();
    let pts: Vec<Point> = spline.iter().collect();
    assert_eq!(pts.first(), pts.last());
    // consecutive samples stay close together: no jumps between segments
    let max_gap = pts
        .windows(2)
        .map(|w| w[0].distance(w[1]))
        .fold(0.0_f32, f32::max);
    assert!(max_gap < 2.0, "largest gap {max_gap}");
}

#[test]
fn open_and_closed_curves_differ_only_by_the_wrap_segment() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(30.0, 5.0),
        Point::new(60.0, 40.0),
    ];
    let open = rasterize_spline(&pts, 0.5, false).unwrap();
    let closed = rasterize_spline(&pts, 0.5, true).unwrap();
    assert_eq!(closed.sample_count() - open.sample_count(), 20);
    assert_ne!(open.iter().last(), closed.iter().last());
}

#[test]
fn too_few_points_is_an_error() {
    let one = [Point::ZERO];
    assert!(rasterize_spline(&one, 0.5, true).is_err());
    assert!(rasterize_spline(&[], 0.5, false).is_err());
}

#[test]
fn vanishing_step_is_rejected_instead_of_overflowing() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(5.0, 5.0),
        Point::new(10.0, 0.0),
    ];
    let result = Spline::new(&pts[..], SplineOptions::new(0.5, false).with_step(1e-30));
    assert!(result.is_err());
}
