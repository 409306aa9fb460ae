//! sketchkit text layout
//!
//! This crate provides:
//! - Radial layout: glyph-by-glyph placement along a circular arc
//! - Multi-line layout: one baseline per `\n`-separated line
//!
//! Nothing here draws. Glyph widths come from a caller-supplied
//! [`GlyphMeasure`], and the results are placements the caller renders.

pub mod arc;
pub mod lines;
pub mod measure;

pub use arc::{layout_arc_text, ArcTextLayout, ArcTextParams, GlyphPlacement, TextAlignment};
pub use lines::{layout_lines, LinePlacement, DEFAULT_LINE_HEIGHT};
pub use measure::{FixedAdvance, GlyphMeasure};

use thiserror::Error;

/// Text layout errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextError {
    #[error("Arc radius {radius} leaves no room for glyphs of size {font_size}")]
    DegenerateRadius { radius: f32, font_size: f32 },
}

pub type Result<T> = std::result::Result<T, TextError>;
