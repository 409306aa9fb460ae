//! sketchkit configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "sketchkit.toml";

/// Top-level configuration (sketchkit.toml). Every field has a default.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct SketchConfig {
    #[serde(default)]
    pub scale: ScaleConfig,
    #[serde(default)]
    pub spline: SplineConfig,
    #[serde(default)]
    pub text: TextConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScaleConfig {
    #[serde(default = "default_band_padding")]
    pub band_padding: f32,
    #[serde(default = "default_point_padding")]
    pub point_padding: f32,
}

fn default_band_padding() -> f32 {
    sketch_scale::DEFAULT_BAND_PADDING
}

fn default_point_padding() -> f32 {
    sketch_scale::DEFAULT_POINT_PADDING
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            band_padding: default_band_padding(),
            point_padding: default_point_padding(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SplineConfig {
    #[serde(default = "default_tension")]
    pub tension: f32,
    /// Sampling step along each segment
    #[serde(default = "default_step")]
    pub step: f32,
}

fn default_tension() -> f32 {
    0.5
}

fn default_step() -> f32 {
    sketch_path::DEFAULT_SAMPLE_STEP
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            tension: default_tension(),
            step: default_step(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextConfig {
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Monospace glyph advance as a fraction of the font size
    #[serde(default = "default_advance_ratio")]
    pub advance_ratio: f32,
    #[serde(default = "default_line_height")]
    pub line_height: f32,
    #[serde(default)]
    pub kerning: f32,
}

fn default_font_size() -> f32 {
    16.0
}

fn default_advance_ratio() -> f32 {
    0.6
}

fn default_line_height() -> f32 {
    sketch_text::DEFAULT_LINE_HEIGHT
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            advance_ratio: default_advance_ratio(),
            line_height: default_line_height(),
            kerning: 0.0,
        }
    }
}

impl SketchConfig {
    /// Load from an explicit file, or from `sketchkit.toml` in the working
    /// directory when present. Without either, defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file {} does not exist", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let local = Path::new(CONFIG_FILE);
                if !local.exists() {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
                local.to_path_buf()
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
