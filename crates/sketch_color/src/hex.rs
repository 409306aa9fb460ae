//! Hex color strings: parsing, blending and random generation

use std::sync::OnceLock;

use regex::Regex;
use sketch_core::{constrain, hex_str, random_int, Xorshift32};

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").expect("hex color pattern is valid")
    })
}

/// Parse `#rgb` / `#rrggbb` (the `#` is optional, digits case-insensitive).
///
/// Short form expands by digit duplication, so `#fa0` reads as `#ffaa00`.
pub fn parse_hex(s: &str) -> Option<[u8; 3]> {
    let caps = hex_pattern().captures(s)?;
    let digits = caps.get(1)?.as_str();
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some([byte(0)?, byte(2)?, byte(4)?])
}

/// Lower-case `#rrggbb` form of a valid hex color.
pub fn normalized_hex(s: &str) -> Option<String> {
    parse_hex(s).map(encode)
}

fn encode([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Mix two hex colors channel by channel.
///
/// `t = 0` gives `a`, `t = 1` gives `b`; `t` is clamped into `[0, 1]`.
/// Returns `#000000` if either input is not a valid hex color.
pub fn blend_hex(a: &str, b: &str, t: f32) -> String {
    let t = constrain(t, 0.0, 1.0);
    let (Some(c1), Some(c2)) = (parse_hex(a), parse_hex(b)) else {
        tracing::debug!("cannot blend {:?} with {:?}, using black", a, b);
        return "#000000".to_string();
    };

    let mix = |x: u8, y: u8| ((1.0 - t) * x as f32 + t * y as f32).round() as u8;
    encode([mix(c1[0], c2[0]), mix(c1[1], c2[1]), mix(c1[2], c2[2])])
}

/// Random `#rrggbb` color using a freshly seeded generator.
pub fn random_hex() -> String {
    random_hex_with(&mut Xorshift32::from_entropy())
}

/// Random `#rrggbb` color drawn from `rng`.
pub fn random_hex_with(rng: &mut Xorshift32) -> String {
    let r = hex_str(random_int(rng, 0, 255) as f32);
    let g = hex_str(random_int(rng, 0, 255) as f32);
    let b = hex_str(random_int(rng, 0, 255) as f32);
    format!("#{r}{g}{b}")
}
