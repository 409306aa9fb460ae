//! sketchkit core
//!
//! Leaf crate shared by the sketchkit layout crates:
//!
//! - [`Point`] for 2D coordinates
//! - numeric helpers ([`constrain`], [`lerp`], angle conversion)
//! - a small deterministic pseudo-random generator ([`Xorshift32`])
//! - number formatting ([`hex_str`], [`thousand_sep`])

pub mod format;
pub mod math;
pub mod point;
pub mod random;

pub use format::{hex_str, thousand_sep, to_radix_string};
pub use math::{constrain, deg2rad, lerp, rad2deg};
pub use point::Point;
pub use random::{choose, random_int, Xorshift32};
