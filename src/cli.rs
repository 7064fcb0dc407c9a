//! Command-line surface for the `tui-chart` binary.
//!
//! Flags map one-to-one onto [`GridConfig`]; `--point` may be repeated and
//! is applied in order, so a later point on the same cell wins.

use clap::Parser;

use crate::core::{AxisConfig, GridConfig, Point, VisualPoint};
use crate::types::{Color, Intensity, TokenStyle, DEFAULT_NORMALIZER, DEFAULT_STEP};

#[derive(Debug, Clone, Parser)]
#[command(name = "tui-chart", version, about = "Draw a labeled coordinate grid in the terminal")]
pub struct Args {
    /// Cells on the positive x side of the origin
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    pub extent_x: i64,

    /// Cells on the positive y side of the origin
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    pub extent_y: i64,

    /// Cells on the negative x side (defaults to --extent-x)
    #[arg(long, allow_hyphen_values = true)]
    pub neg_extent_x: Option<i64>,

    /// Cells on the negative y side (defaults to --extent-y)
    #[arg(long, allow_hyphen_values = true)]
    pub neg_extent_y: Option<i64>,

    #[arg(long, default_value_t = DEFAULT_STEP, allow_hyphen_values = true)]
    pub step_x: i64,

    #[arg(long, default_value_t = DEFAULT_STEP, allow_hyphen_values = true)]
    pub step_y: i64,

    /// Modulus applied to x tick labels
    #[arg(long, default_value_t = DEFAULT_NORMALIZER, allow_hyphen_values = true)]
    pub normalizer_x: i64,

    /// Modulus applied to y tick labels
    #[arg(long, default_value_t = DEFAULT_NORMALIZER, allow_hyphen_values = true)]
    pub normalizer_y: i64,

    /// Extend the grid to negative x
    #[arg(long)]
    pub negative_x: bool,

    /// Extend the grid to negative y
    #[arg(long)]
    pub negative_y: bool,

    /// Marker as X,Y[,TOKEN[,FORE[,BACK[,INTENSITY]]]]; empty fields are skipped
    #[arg(long = "point", value_parser = parse_point, allow_hyphen_values = true)]
    pub points: Vec<VisualPoint>,

    /// Store bare tokens without ANSI styling
    #[arg(long)]
    pub no_color: bool,

    /// Print a JSON snapshot instead of the grid
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn grid_config(&self) -> GridConfig {
        GridConfig::new(
            AxisConfig::new(
                self.extent_x,
                self.neg_extent_x.unwrap_or(self.extent_x),
                self.step_x,
                self.normalizer_x,
                self.negative_x,
            ),
            AxisConfig::new(
                self.extent_y,
                self.neg_extent_y.unwrap_or(self.extent_y),
                self.step_y,
                self.normalizer_y,
                self.negative_y,
            ),
        )
    }
}

/// Parse `X,Y[,TOKEN[,FORE[,BACK[,INTENSITY]]]]`
pub fn parse_point(arg: &str) -> Result<VisualPoint, String> {
    let fields: Vec<&str> = arg.split(',').map(str::trim).collect();
    if fields.len() < 2 || fields.len() > 6 {
        return Err(format!(
            "expected X,Y[,TOKEN[,FORE[,BACK[,INTENSITY]]]], got {arg:?}"
        ));
    }

    let coord = |s: &str| {
        s.parse::<i64>()
            .map_err(|e| format!("bad coordinate {s:?}: {e}"))
    };
    let x = coord(fields[0])?;
    let y = coord(fields[1])?;

    let field = |i: usize| fields.get(i).copied().filter(|s| !s.is_empty());
    let color = |i: usize| {
        field(i)
            .map(|name| Color::from_name(name).ok_or_else(|| format!("unknown color {name:?}")))
            .transpose()
    };

    let style = TokenStyle::new(
        color(3)?,
        color(4)?,
        field(5)
            .map(|name| {
                Intensity::from_name(name).ok_or_else(|| format!("unknown intensity {name:?}"))
            })
            .transpose()?,
    );

    let point = match field(2) {
        Some(token) => VisualPoint::parse(x, y, token),
        None => Ok(VisualPoint::from(Point::new(x, y))),
    }
    .map_err(|e| e.to_string())?;

    Ok(point.with_style(style))
}
