use sketch_core::Point;
use sketch_text::{layout_arc_text, ArcTextParams, FixedAdvance, GlyphMeasure, TextAlignment};

fn proportional(c: char) -> f32 {
    match c {
        'i' | 'l' => 3.0,
        'm' | 'w' => 11.0,
        _ => 7.0,
    }
}

#[test]
fn single_centered_glyph_ends_within_half_its_angular_width() {
    let params = ArcTextParams::new(Point::new(0.0, 0.0), 120.0, 0.7).font_size(12.0);
    let width = proportional('m');
    let half = width / (params.radius - params.font_size) / 2.0;
    let layout = layout_arc_text("m", &proportional, &params).unwrap();
    assert_eq!(layout.placements.len(), 1);
    assert!((layout.next_angle - params.start_angle).abs() <= half + 1e-6);
}

#[test]
fn kerning_does_not_push_a_centered_run_past_its_last_glyph() {
    let m = FixedAdvance::new(5.0);
    let params = ArcTextParams::new(Point::ZERO, 60.0, 0.0)
        .font_size(10.0)
        .kerning(5.0);
    let half = 5.0 / (params.radius - params.font_size) / 2.0;
    let single = layout_arc_text("a", &m, &params).unwrap();
    assert!((single.next_angle - params.start_angle).abs() <= half + 1e-6);

    // ends half a glyph past the last glyph's center
    let run = layout_arc_text("abc", &m, &params).unwrap();
    let frame = params.start_angle + std::f32::consts::FRAC_PI_2 + std::f32::consts::PI;
    let last = run.placements[2].rotation - frame;
    assert!((run.next_angle - (last - half)).abs() < 1e-5);
}

#[test]
fn centered_text_is_symmetric_around_start_angle() {
    let m = FixedAdvance::new(6.0);
    let params = ArcTextParams::new(Point::ZERO, 80.0, 0.0).font_size(8.0);
    let layout = layout_arc_text("abcde", &m, &params).unwrap();
    let frame = params.start_angle + std::f32::consts::FRAC_PI_2 + std::f32::consts::PI;
    let first = layout.placements[0].rotation - frame;
    let last = layout.placements[4].rotation - frame;
    assert!((first + last).abs() < 1e-4, "first {first}, last {last}");
    // the middle glyph sits exactly on the start angle
    assert!((layout.placements[2].rotation - frame).abs() < 1e-5);
}

#[test]
fn chained_runs_continue_on_the_same_arc() {
    let m = FixedAdvance::new(5.0);
    let base = ArcTextParams::new(Point::ZERO, 100.0, 0.0)
        .font_size(10.0)
        .alignment(TextAlignment::Left);
    let first = layout_arc_text("abc", &m, &base).unwrap();
    let second = layout_arc_text("def", &m, &base.continued(&first)).unwrap();
    let joined = layout_arc_text("abcdef", &m, &base).unwrap();
    assert!((second.next_angle - joined.next_angle).abs() < 1e-5);
}

#[test]
fn every_glyph_sits_on_the_same_circle() {
    let params = ArcTextParams::new(Point::new(50.0, -20.0), 90.0, 1.2)
        .font_size(14.0)
        .alignment(TextAlignment::Right)
        .inward(true)
        .kerning(2.0);
    let layout = layout_arc_text("circular", &proportional, &params).unwrap();
    let expected = params.radius - params.font_size / 2.0;
    for g in &layout.placements {
        let d = Point::new(g.x, g.y).distance(params.center);
        assert!((d - expected).abs() < 1e-3);
    }
    assert_eq!(layout.placements.len(), "circular".chars().count());
    assert!(proportional.text_width("circular") > 0.0);
}
