use serde::Serialize;
use sketch_core::Point;

pub const DEFAULT_LINE_HEIGHT: f32 = 1.2;

/// One line of a multi-line text block and where its baseline starts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinePlacement<'a> {
    pub text: &'a str,
    pub position: Point,
}

/// Split on `\n`; line `i` sits `i * font_size * line_height` below `origin`.
pub fn layout_lines(
    text: &str,
    origin: Point,
    font_size: f32,
    line_height: f32,
) -> Vec<LinePlacement<'_>> {
    let advance = font_size * line_height;
    text.split('\n')
        .enumerate()
        .map(|(i, line)| LinePlacement {
            text: line,
            position: Point::new(origin.x, origin.y + i as f32 * advance),
        })
        .collect()
}
