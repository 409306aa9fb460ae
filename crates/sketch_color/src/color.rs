//! Color types and normalization

use std::fmt;

use serde::Serialize;
use sketch_core::constrain;

use crate::hex::parse_hex;

/// Normalized RGBA color.
///
/// Channels are in `[0, 255]` and are not rounded; alpha is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(255.0, 255.0, 255.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color with every component clamped into its legal range.
    /// Negative zero is folded into `0.0`.
    pub fn clamped(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: constrain(r, 0.0, 255.0) + 0.0,
            g: constrain(g, 0.0, 255.0) + 0.0,
            b: constrain(b, 0.0, 255.0) + 0.0,
            a: constrain(a, 0.0, 1.0) + 0.0,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: constrain(alpha, 0.0, 1.0) + 0.0,
            ..self
        }
    }

    /// CSS `rgba(r, g, b, a)` string.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// The accepted color input shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorInput {
    /// Red, green and blue intensities.
    Rgb([f32; 3]),
    /// One intensity used for all three channels.
    Gray(f32),
    /// `#rgb` or `#rrggbb`, leading `#` optional.
    Hex(String),
    /// Channel list of unchecked length; only length 3 is meaningful.
    Channels(Vec<f32>),
}

impl From<[f32; 3]> for ColorInput {
    fn from(rgb: [f32; 3]) -> Self {
        ColorInput::Rgb(rgb)
    }
}

impl From<f32> for ColorInput {
    fn from(v: f32) -> Self {
        ColorInput::Gray(v)
    }
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        ColorInput::Hex(s.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        ColorInput::Hex(s)
    }
}

impl From<Vec<f32>> for ColorInput {
    fn from(v: Vec<f32>) -> Self {
        ColorInput::Channels(v)
    }
}

impl From<&[f32]> for ColorInput {
    fn from(v: &[f32]) -> Self {
        ColorInput::Channels(v.to_vec())
    }
}

/// Normalize any accepted input into a clamped [`Color`].
pub fn to_color(input: impl Into<ColorInput>, alpha: f32) -> Color {
    match input.into() {
        ColorInput::Rgb([r, g, b]) => Color::clamped(r, g, b, alpha),
        ColorInput::Gray(v) => Color::clamped(v, v, v, alpha),
        ColorInput::Hex(s) => match parse_hex(&s) {
            Some([r, g, b]) => Color::clamped(r as f32, g as f32, b as f32, alpha),
            None => {
                tracing::debug!("malformed hex color {:?}, using black", s);
                Color::clamped(0.0, 0.0, 0.0, alpha)
            }
        },
        ColorInput::Channels(channels) => match channels.as_slice() {
            &[r, g, b] => Color::clamped(r, g, b, alpha),
            other => {
                tracing::debug!(
                    "color array needs 3 channels, got {}; using opaque black",
                    other.len()
                );
                Color::BLACK
            }
        },
    }
}

/// Normalize any accepted input straight to its CSS `rgba(...)` string.
pub fn color_to_css(input: impl Into<ColorInput>, alpha: f32) -> String {
    to_color(input, alpha).to_css()
}
