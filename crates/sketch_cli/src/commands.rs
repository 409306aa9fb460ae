//! Command execution. Every command produces a JSON value for stdout.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use sketch_color::{blend_hex, color_to_css, random_hex, random_hex_with, ColorInput};
use sketch_core::{deg2rad, Point, Xorshift32};
use sketch_path::{Spline, SplineOptions};
use sketch_scale::{BandScale, LinearScale, OrdinalScale, PointScale};
use sketch_text::{layout_arc_text, layout_lines, ArcTextParams, FixedAdvance};

use crate::cli::{ArcTextArgs, Command, DiscreteArgs, ScaleCommand};
use crate::config::SketchConfig;

pub fn run(command: &Command, config: &SketchConfig) -> Result<Value> {
    match command {
        Command::Color { value, alpha } => {
            let input = parse_color_input(value)?;
            Ok(json!(color_to_css(input, *alpha)))
        }
        Command::Blend { a, b, t } => Ok(json!(blend_hex(a, b, *t))),
        Command::RandomColor { seed } => {
            let hex = match seed {
                Some(seed) => random_hex_with(&mut Xorshift32::new(*seed)),
                None => random_hex(),
            };
            Ok(json!(hex))
        }
        Command::Scale { kind } => run_scale(kind, config),
        Command::Spline {
            points,
            tension,
            closed,
            step,
            bezier,
        } => {
            let options = SplineOptions::new(tension.unwrap_or(config.spline.tension), *closed)
                .with_step(step.unwrap_or(config.spline.step));
            let spline = Spline::from_flat(points, options)?;
            if *bezier {
                return Ok(serde_json::to_value(spline.to_bezier_path())?);
            }
            let coords: Vec<[f32; 2]> = spline.iter().map(|p| [p.x, p.y]).collect();
            Ok(json!(coords))
        }
        Command::ArcText(args) => run_arc_text(args, config),
        Command::Config => Ok(serde_json::to_value(config)?),
        Command::Lines {
            text,
            x,
            y,
            font_size,
            line_height,
        } => {
            let text = text.replace("\\n", "\n");
            let lines = layout_lines(
                &text,
                Point::new(*x, *y),
                font_size.unwrap_or(config.text.font_size),
                line_height.unwrap_or(config.text.line_height),
            );
            Ok(serde_json::to_value(lines)?)
        }
    }
}

/// `#...` is hex, a comma list is channels, a bare number is a gray level,
/// anything else is treated as hex and normalizes to black if malformed.
fn parse_color_input(value: &str) -> Result<ColorInput> {
    if value.starts_with('#') {
        return Ok(ColorInput::Hex(value.to_string()));
    }
    if value.contains(',') {
        let channels = value
            .split(',')
            .map(|c| c.trim().parse::<f32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .with_context(|| format!("Invalid channel list {value:?}"))?;
        return Ok(ColorInput::Channels(channels));
    }
    Ok(match value.parse::<f32>() {
        Ok(gray) => ColorInput::Gray(gray),
        Err(_) => ColorInput::Hex(value.to_string()),
    })
}

fn pair(values: &[f32], name: &str) -> Result<[f32; 2]> {
    match values {
        &[a, b] => Ok([a, b]),
        _ => anyhow::bail!("--{name} takes exactly two values, got {}", values.len()),
    }
}

fn run_scale(kind: &ScaleCommand, config: &SketchConfig) -> Result<Value> {
    match kind {
        ScaleCommand::Linear {
            domain,
            range,
            values,
        } => {
            let scale = LinearScale::new(pair(domain, "domain")?, pair(range, "range")?)?;
            let mapped: Vec<f32> = values.iter().map(|v| scale.map(*v)).collect();
            Ok(json!(mapped))
        }
        ScaleCommand::Band(args) => {
            let padding = args.padding.unwrap_or(config.scale.band_padding);
            let range = pair(&args.range, "range")?;
            let scale = BandScale::new(args.labels.iter().cloned(), range, padding)?;
            Ok(json!({
                "bandwidth": scale.bandwidth(),
                "positions": query_positions(args, |q| scale.map(q)),
            }))
        }
        ScaleCommand::Point(args) => {
            let padding = args.padding.unwrap_or(config.scale.point_padding);
            let range = pair(&args.range, "range")?;
            let scale = PointScale::new(args.labels.iter().cloned(), range, padding)?;
            Ok(json!({
                "step": scale.step(),
                "positions": query_positions(args, |q| scale.map(q)),
            }))
        }
        ScaleCommand::Ordinal {
            labels,
            range,
            queries,
        } => {
            let scale = OrdinalScale::new(labels.iter().cloned(), range.as_slice())?;
            let mapped: Vec<Option<&String>> =
                queries.iter().map(|q| scale.map(q.as_str())).collect();
            Ok(json!(mapped))
        }
    }
}

/// Unknown labels come out as `null`.
fn query_positions(args: &DiscreteArgs, map: impl Fn(&str) -> Option<f32>) -> Vec<Option<f32>> {
    args.queries.iter().map(|q| map(q.as_str())).collect()
}

fn run_arc_text(args: &ArcTextArgs, config: &SketchConfig) -> Result<Value> {
    let font_size = args.font_size.unwrap_or(config.text.font_size);
    let params = ArcTextParams::new(Point::new(args.cx, args.cy), args.radius, deg2rad(args.start))
        .alignment(args.align.into())
        .outside(!args.inside)
        .inward(args.inward)
        .kerning(args.kerning.unwrap_or(config.text.kerning))
        .font_size(font_size);
    let measure = FixedAdvance::from_font_size(font_size, config.text.advance_ratio);
    let layout = layout_arc_text(&args.text, &measure, &params)?;
    Ok(serde_json::to_value(layout)?)
}
