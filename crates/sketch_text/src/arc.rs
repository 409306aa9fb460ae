//! Text along a circular arc
//!
//! Glyphs are placed one at a time. For each glyph the frame rotates by half
//! its angular width, the glyph is placed, then the frame rotates by the
//! other half plus the kerning. Angular width is `width / (radius - font_size)`,
//! so the same pixel kerning gives a different angle on a different radius.
//!
//! The returned [`ArcTextLayout::next_angle`] is where the run ends, which is
//! the start angle for a follow-up run on the same arc.

use std::f32::consts::{FRAC_PI_2, PI};

use serde::Serialize;
use sketch_core::Point;

use crate::measure::GlyphMeasure;
use crate::{Result, TextError};

/// Text alignment relative to the start angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    /// Text runs clockwise from the start angle
    Left,
    /// Text is centered on the start angle
    #[default]
    Center,
    /// Text runs counter-clockwise from the start angle
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcTextParams {
    pub center: Point,
    pub radius: f32,
    /// Radians, canvas orientation (0 points right, positive turns clockwise)
    pub start_angle: f32,
    pub alignment: TextAlignment,
    /// Glyphs sit outside the circle; otherwise the radius shrinks by the font size
    pub outside: bool,
    /// Glyph tops point at the center
    pub inward: bool,
    /// Extra spacing between glyphs in pixels
    pub kerning: f32,
    pub font_size: f32,
}

impl ArcTextParams {
    pub fn new(center: Point, radius: f32, start_angle: f32) -> Self {
        Self {
            center,
            radius,
            start_angle,
            alignment: TextAlignment::Center,
            outside: true,
            inward: false,
            kerning: 0.0,
            font_size: 16.0,
        }
    }

    pub fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn outside(mut self, outside: bool) -> Self {
        self.outside = outside;
        self
    }

    pub fn inward(mut self, inward: bool) -> Self {
        self.inward = inward;
        self
    }

    pub fn kerning(mut self, kerning: f32) -> Self {
        self.kerning = kerning;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Same parameters, starting where `previous` ended.
    pub fn continued(self, previous: &ArcTextLayout) -> Self {
        Self {
            start_angle: previous.next_angle,
            ..self
        }
    }
}

/// A glyph ready for rendering: translate to `(x, y)`, rotate by `rotation`,
/// draw the glyph centered (horizontally and vertically) on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlyphPlacement {
    pub glyph: char,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcTextLayout {
    /// Placements in drawing order
    pub placements: Vec<GlyphPlacement>,
    /// Angle at which the run ends
    pub next_angle: f32,
}

/// Lay out `text` along the arc described by `params`.
///
/// Fails when the arc radius minus the font size is not positive, since
/// angular widths would be infinite or flip direction.
pub fn layout_arc_text<M>(text: &str, measure: &M, params: &ArcTextParams) -> Result<ArcTextLayout>
where
    M: GlyphMeasure + ?Sized,
{
    let clockwise = if params.alignment == TextAlignment::Left {
        1.0
    } else {
        -1.0
    };
    let radius = if params.outside {
        params.radius
    } else {
        params.radius - params.font_size
    };
    let arc_radius = radius - params.font_size;
    if !(arc_radius > 0.0 && arc_radius.is_finite()) {
        return Err(TextError::DegenerateRadius {
            radius: params.radius,
            font_size: params.font_size,
        });
    }

    // Keep the reading direction left-to-right for the chosen orientation.
    let mut glyphs: Vec<(char, f32)> = text.chars().map(|c| (c, measure.glyph_width(c))).collect();
    let reversed = matches!(
        (params.alignment, params.inward),
        (TextAlignment::Center | TextAlignment::Right, true) | (TextAlignment::Left, false)
    );
    if reversed {
        glyphs.reverse();
    }

    let mut angle = params.start_angle + FRAC_PI_2;
    if !params.inward {
        angle += PI;
    }

    let centering = if params.alignment == TextAlignment::Center {
        let last = glyphs.len().saturating_sub(1);
        glyphs
            .iter()
            .enumerate()
            .map(|(i, &(_, width))| {
                let gap = if i == last { 0.0 } else { params.kerning };
                (width + gap) / arc_radius / 2.0 * -clockwise
            })
            .sum::<f32>()
    } else {
        0.0
    };
    angle += centering;

    let side = if params.inward { 1.0 } else { -1.0 };
    let local = Point::new(0.0, side * (params.font_size / 2.0 - radius));

    let mut consumed = 0.0;
    let mut placements = Vec::with_capacity(glyphs.len());
    for (glyph, width) in glyphs {
        let lead = width / 2.0 / arc_radius * clockwise;
        let trail = (width / 2.0 + params.kerning) / arc_radius * clockwise;

        angle += lead;
        let at = params.center + local.rotated(angle);
        placements.push(GlyphPlacement {
            glyph,
            x: at.x,
            y: at.y,
            rotation: angle,
        });
        angle += trail;
        consumed += lead + trail;
    }

    // A centered run ends at its last glyph, without the gap kerning adds after it.
    if params.alignment == TextAlignment::Center && !placements.is_empty() {
        consumed -= params.kerning / arc_radius * clockwise;
    }

    tracing::trace!(
        glyphs = placements.len(),
        reversed,
        consumed,
        "arc text layout"
    );

    Ok(ArcTextLayout {
        placements,
        next_angle: params.start_angle + centering + consumed,
    })
}
