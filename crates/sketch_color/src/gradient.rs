//! Linear gradient descriptions
//!
//! A gradient here is only a value: the caller hands `css_stops()` to its
//! drawing surface. `color_at` samples the ramp without one.

use serde::Serialize;
use sketch_core::{constrain, lerp, Point};

use crate::color::{to_color, Color, ColorInput};

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position along the gradient, `0.0` to `1.0`
    pub offset: f32,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Add a stop. The offset is clamped to `[0, 1]` and stops stay ordered by
    /// offset; a stop at an existing offset goes after the ones already there.
    pub fn with_stop(self, offset: f32, color: impl Into<ColorInput>) -> Self {
        self.with_color_stop(offset, to_color(color, 1.0))
    }

    /// Same as [`with_stop`](Self::with_stop) for an already built color.
    pub fn with_color_stop(mut self, offset: f32, color: Color) -> Self {
        let offset = unit_offset(offset);
        let color = Color::clamped(color.r, color.g, color.b, color.a);
        let at = self.stops.partition_point(|s| s.offset <= offset);
        self.stops.insert(at, GradientStop { offset, color });
        self
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Stops as `(offset, "rgba(...)")` pairs.
    pub fn css_stops(&self) -> Vec<(f32, String)> {
        self.stops
            .iter()
            .map(|s| (s.offset, s.color.to_css()))
            .collect()
    }

    /// Interpolated color at `offset`. Before the first stop and after the last
    /// one the end colors are held. `None` when there are no stops.
    pub fn color_at(&self, offset: f32) -> Option<Color> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;
        let offset = unit_offset(offset);
        if offset <= first.offset {
            return Some(first.color);
        }
        if offset >= last.offset {
            return Some(last.color);
        }

        let hi = self.stops.partition_point(|s| s.offset <= offset);
        let a = self.stops[hi - 1];
        let b = self.stops[hi];
        let span = b.offset - a.offset;
        if span <= f32::EPSILON {
            return Some(b.color);
        }
        let t = (offset - a.offset) / span;
        Some(Color::rgba(
            lerp(a.color.r, b.color.r, t),
            lerp(a.color.g, b.color.g, t),
            lerp(a.color.b, b.color.b, t),
            lerp(a.color.a, b.color.a, t),
        ))
    }
}

/// Offset clamped into `[0, 1]`; NaN reads as the gradient start.
fn unit_offset(offset: f32) -> f32 {
    if offset.is_nan() {
        0.0
    } else {
        constrain(offset, 0.0, 1.0)
    }
}
