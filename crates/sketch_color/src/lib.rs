//! sketchkit color model
//!
//! Every fill or stroke color passes through [`color_to_css`] before it
//! reaches a drawing surface. Three input shapes are accepted (channel
//! triplet, gray level, hex string) and always come out as a clamped
//! `rgba(...)` string. Malformed input degrades to black instead of failing.
//!
//! ```rust
//! use sketch_color::{blend_hex, color_to_css};
//!
//! assert_eq!(color_to_css("#fff", 0.5), "rgba(255, 255, 255, 0.5)");
//! assert_eq!(color_to_css([300.0_f32, 20.0, -4.0], 2.0), "rgba(255, 20, 0, 1)");
//! assert_eq!(blend_hex("#000000", "ffffff", 0.5), "#808080");
//! ```

pub mod color;
pub mod gradient;
pub mod hex;

pub use color::{color_to_css, to_color, Color, ColorInput};
pub use gradient::{GradientStop, LinearGradient};
pub use hex::{blend_hex, normalized_hex, parse_hex, random_hex, random_hex_with};
