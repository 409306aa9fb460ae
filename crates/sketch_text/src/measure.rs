//! Glyph measurement
//!
//! Layout only needs the advance width of single glyphs. A rendering backend
//! implements [`GlyphMeasure`] on top of its own text metrics; tests and
//! headless callers can use [`FixedAdvance`] or a closure.

/// Advance width, in pixels, of individual glyphs.
pub trait GlyphMeasure {
    fn glyph_width(&self, glyph: char) -> f32;

    fn text_width(&self, text: &str) -> f32 {
        text.chars().map(|c| self.glyph_width(c)).sum()
    }
}

impl<F> GlyphMeasure for F
where
    F: Fn(char) -> f32,
{
    fn glyph_width(&self, glyph: char) -> f32 {
        self(glyph)
    }
}

/// Monospace measurement: every glyph has the same advance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    pub advance: f32,
}

impl FixedAdvance {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }

    /// Advance as a fraction of the font size.
    pub fn from_font_size(font_size: f32, ratio: f32) -> Self {
        Self::new(font_size * ratio)
    }
}

impl GlyphMeasure for FixedAdvance {
    fn glyph_width(&self, _glyph: char) -> f32 {
        self.advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_measure_glyphs() {
        let narrow_i = |c: char| -> f32 { if c == 'i' { 3.0 } else { 8.0 } };
        assert_eq!(narrow_i.text_width("hi"), 11.0);
    }

    #[test]
    fn fixed_advance_scales_with_font_size() {
        let m = FixedAdvance::from_font_size(20.0, 0.5);
        assert_eq!(m.glyph_width('W'), 10.0);
        assert_eq!(m.text_width("abc"), 30.0);
    }
}
