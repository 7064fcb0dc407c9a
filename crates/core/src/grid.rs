//! Grid module - the labeled coordinate surface
//!
//! Logical coordinates are signed and centered on the origin; storage is a
//! flat row-major `Vec` indexed from zero. Row 0 holds the most negative `y`,
//! column 0 the most negative `x`:
//!
//! ```text
//! col = x + effective_neg_x
//! row = y + effective_neg_y
//! index = row * width + col
//! ```
//!
//! Every access is validated against the sign policy and the extents before
//! anything is read or written, so a failed call never touches the grid.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::axis::{Axis, AxisConfig, GridConfig};
use crate::decorate::Decorate;
use crate::error::GridError;
use crate::log;
use crate::point::{Point, VisualPoint};
use crate::snapshot::GridSnapshot;
use crate::types::{BLANK, ORIGIN_LABEL};

/// A text grid with axis labels and point markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    config: GridConfig,
    width: usize,
    height: usize,
    /// Row-major cells (row * width + col), row 0 = most negative y
    cells: Vec<String>,
}

impl Grid {
    /// Build an empty grid and write its axis labels.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        let (width, height) = match config.dimensions() {
            Ok(dims) => dims,
            Err(err) => {
                log::warn!(error = %err, "rejected grid configuration");
                return Err(err);
            }
        };

        let mut grid = Self {
            config,
            width,
            height,
            cells: vec![BLANK.to_string(); width * height],
        };
        grid.write_axis_labels()?;

        log::debug!(width, height, "grid created");
        Ok(grid)
    }

    /// Build a grid and place `points` in order; later points overwrite
    /// earlier ones on the same cell.
    pub fn with_points<D: Decorate + ?Sized>(
        config: GridConfig,
        points: &[VisualPoint],
        decorator: &D,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(config)?;
        for point in points {
            grid.place(point, decorator)?;
        }
        Ok(grid)
    }

    fn write_axis_labels(&mut self) -> Result<(), GridError> {
        let GridConfig { x, y } = self.config;

        self.put(&Point::new(0, 0), ORIGIN_LABEL.to_string())?;
        for i in 1..=x.extent_pos {
            self.put(&Point::new(i, 0), x.tick_label(i))?;
        }
        for i in 1..=x.effective_neg() {
            self.put(&Point::new(-i, 0), x.tick_label(i))?;
        }
        for i in 1..=y.extent_pos {
            self.put(&Point::new(0, i), y.tick_label(i))?;
        }
        for i in 1..=y.effective_neg() {
            self.put(&Point::new(0, -i), y.tick_label(i))?;
        }
        Ok(())
    }

    /// Validate a coordinate and map it to its storage index
    fn index(&self, point: &Point) -> Result<usize, GridError> {
        let at = (point.x(), point.y());
        let idx = self
            .config
            .x
            .index_of(point.x(), at, Axis::X)
            .and_then(|col| {
                let row = self.config.y.index_of(point.y(), at, Axis::Y)?;
                Ok(row * self.width + col)
            });
        if idx.is_err() {
            log::debug!(x = at.0, y = at.1, "coordinate rejected");
        }
        idx
    }

    /// Write without the width check; axis labels may be several digits wide.
    fn put(&mut self, point: &Point, value: String) -> Result<(), GridError> {
        let idx = self.index(point)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn x_axis(&self) -> &AxisConfig {
        &self.config.x
    }

    pub fn y_axis(&self) -> &AxisConfig {
        &self.config.y
    }

    /// Storage `(col, row)` of the origin
    pub fn origin_index(&self) -> (usize, usize) {
        (self.config.x.origin(), self.config.y.origin())
    }

    /// Read the cell at `point`
    pub fn get(&self, point: &Point) -> Result<&str, GridError> {
        let idx = self.index(point)?;
        Ok(&self.cells[idx])
    }

    /// Write `token` at `point`.
    ///
    /// The token must render as exactly one cell; ANSI escape sequences do
    /// not count towards its width.
    pub fn set(&mut self, point: &Point, token: &str) -> Result<(), GridError> {
        let idx = self.index(point)?;
        let width = display_width(token);
        if width != 1 || has_control(token) {
            return Err(GridError::InvalidToken {
                token: token.to_string(),
                width,
            });
        }
        self.cells[idx] = token.to_string();
        Ok(())
    }

    /// Reset the cell at `point` to blank
    pub fn delete(&mut self, point: &Point) -> Result<(), GridError> {
        self.set(point, BLANK)
    }

    /// Decorate a point's token and store the result
    pub fn place<D: Decorate + ?Sized>(
        &mut self,
        point: &VisualPoint,
        decorator: &D,
    ) -> Result<(), GridError> {
        let token = decorator.decorate(point.token(), point.style());
        self.set(point.point(), &token)
    }

    /// Rows as text, largest `y` first.
    ///
    /// Built fresh on every call.
    pub fn render(&self) -> Vec<String> {
        self.cells
            .chunks_exact(self.width)
            .rev()
            .map(|row| row.concat())
            .collect()
    }

    /// Serializable view of the current state
    pub fn snapshot(&self) -> GridSnapshot {
        let (origin_col, origin_row) = self.origin_index();
        GridSnapshot {
            width: self.width,
            height: self.height,
            origin_col,
            origin_row,
            rows: self.render(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.render().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

/// Terminal columns taken by `s` once escape sequences are removed
pub fn display_width(s: &str) -> usize {
    visible_text(s).width()
}

/// Control characters (newline included) left after stripping escapes
fn has_control(s: &str) -> bool {
    visible_text(s).chars().any(char::is_control)
}

fn visible_text(s: &str) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes::strip(s)).into_owned()
}
