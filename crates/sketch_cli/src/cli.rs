use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use sketch_text::TextAlignment;

#[derive(Parser, Debug)]
#[command(name = "sketchkit")]
#[command(version, about = "Color, scale, spline and arc-text layout helpers")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./sketchkit.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize a color to an rgba() string.
    ///
    /// VALUE is `#rgb`/`#rrggbb`, a comma-separated channel list, or a single
    /// gray level.
    Color {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long, default_value_t = 1.0)]
        alpha: f32,
    },

    /// Mix two hex colors; T=0 gives A, T=1 gives B
    Blend { a: String, b: String, t: f32 },

    /// Print a random hex color
    RandomColor {
        /// Seed for a reproducible color
        #[arg(long)]
        seed: Option<u32>,
    },

    /// Map values through a scale
    Scale {
        #[command(subcommand)]
        kind: ScaleCommand,
    },

    /// Rasterize a spline through the given points
    Spline {
        /// Flattened coordinates: x0,y0,x1,y1,...
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        points: Vec<f32>,
        #[arg(long)]
        tension: Option<f32>,
        #[arg(long)]
        closed: bool,
        #[arg(long)]
        step: Option<f32>,
        /// Emit cubic Bezier segments instead of a sampled polyline
        #[arg(long)]
        bezier: bool,
    },

    /// Lay out text along a circular arc
    ArcText(ArcTextArgs),

    /// Print the effective configuration as TOML
    Config,

    /// Lay out multi-line text (lines separated by \n)
    Lines {
        text: String,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        x: f32,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        y: f32,
        #[arg(long)]
        font_size: Option<f32>,
        #[arg(long)]
        line_height: Option<f32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScaleCommand {
    /// Numeric domain to numeric range
    Linear {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        domain: Vec<f32>,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        range: Vec<f32>,
        #[arg(allow_hyphen_values = true)]
        values: Vec<f32>,
    },
    /// Labels to band starts
    Band(DiscreteArgs),
    /// Labels to evenly spaced points
    Point(DiscreteArgs),
    /// Labels to values, cycling through VALUES
    Ordinal {
        #[arg(long, value_delimiter = ',', required = true)]
        labels: Vec<String>,
        #[arg(long = "values", value_delimiter = ',', required = true)]
        range: Vec<String>,
        queries: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct DiscreteArgs {
    #[arg(long, value_delimiter = ',', required = true)]
    pub labels: Vec<String>,
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub range: Vec<f32>,
    #[arg(long)]
    pub padding: Option<f32>,
    pub queries: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ArcTextArgs {
    pub text: String,
    #[arg(long)]
    pub radius: f32,
    /// Start angle in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub start: f32,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub cx: f32,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub cy: f32,
    #[arg(long, value_enum, default_value = "center")]
    pub align: Align,
    /// Place glyphs inside the circle
    #[arg(long)]
    pub inside: bool,
    /// Point glyph tops at the center
    #[arg(long)]
    pub inward: bool,
    #[arg(long, allow_hyphen_values = true)]
    pub kerning: Option<f32>,
    #[arg(long)]
    pub font_size: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl From<Align> for TextAlignment {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => TextAlignment::Left,
            Align::Center => TextAlignment::Center,
            Align::Right => TextAlignment::Right,
        }
    }
}
