//! Point module - signed grid coordinates
//!
//! [`Point`] is a plain `(x, y)` pair that carries its [`Quarter`]. The
//! quarter is derived from the coordinates and kept in sync by every
//! operation that changes them, so it cannot be set on its own.
//!
//! [`VisualPoint`] adds the marker drawn at that coordinate: a single-cell
//! token plus optional colors.

use unicode_width::UnicodeWidthChar;

use crate::error::GridError;
use crate::types::{Quarter, QuarterSet, Region, TokenStyle, DEFAULT_TOKEN};

/// A logical grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: i64,
    y: i64,
    quarter: Quarter,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            quarter: Quarter::of(x, y),
        }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn quarter(&self) -> Quarter {
        self.quarter
    }

    /// Return a new point with both coordinates multiplied by `k`.
    ///
    /// Saturates at the `i64` range.
    pub fn scale_by_scalar(&self, k: i64) -> Point {
        Point::new(self.x.saturating_mul(k), self.y.saturating_mul(k))
    }

    /// Multiply `x` by `kx` and `y` by `ky` in place.
    ///
    /// Returns `self` so calls can be chained.
    pub fn scale_by_axis(&mut self, kx: i64, ky: i64) -> &mut Self {
        self.x = self.x.saturating_mul(kx);
        self.y = self.y.saturating_mul(ky);
        self.quarter = Quarter::of(self.x, self.y);
        self
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

/// Scalar-first form of [`Point::scale_by_scalar`]; both orders agree.
pub fn scalar_scale(k: i64, point: &Point) -> Point {
    Point::new(k.saturating_mul(point.x), k.saturating_mul(point.y))
}

/// Smallest region containing the quarters of every point.
///
/// Returns `None` when `points` is empty.
pub fn enclosing_region<'a, I>(points: I) -> Option<Region>
where
    I: IntoIterator<Item = &'a Point>,
{
    points
        .into_iter()
        .map(Point::quarter)
        .collect::<QuarterSet>()
        .enclosing_region()
}

/// A point together with the marker drawn on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualPoint {
    point: Point,
    token: char,
    style: TokenStyle,
}

impl VisualPoint {
    /// Create a marker with the given token and no styling.
    ///
    /// The token must occupy exactly one terminal cell.
    pub fn new(x: i64, y: i64, token: char) -> Result<Self, GridError> {
        if token.is_control() || token.width() != Some(1) {
            return Err(GridError::config(format!(
                "token {token:?} must be one cell wide"
            )));
        }
        Ok(Self {
            point: Point::new(x, y),
            token,
            style: TokenStyle::default(),
        })
    }

    /// Create a marker from a string token, which must be a single character.
    pub fn parse(x: i64, y: i64, token: &str) -> Result<Self, GridError> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(x, y, c),
            _ => Err(GridError::config(format!(
                "token {token:?} must be exactly one character"
            ))),
        }
    }

    /// Replace the styling
    pub fn with_style(mut self, style: TokenStyle) -> Self {
        self.style = style;
        self
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn token(&self) -> char {
        self.token
    }

    pub fn style(&self) -> &TokenStyle {
        &self.style
    }
}

impl From<Point> for VisualPoint {
    fn from(point: Point) -> Self {
        Self {
            point,
            token: DEFAULT_TOKEN,
            style: TokenStyle::default(),
        }
    }
}
