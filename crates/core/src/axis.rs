//! Axis configuration and tick labels.

use std::mem;

use crate::error::GridError;
use crate::types::{DEFAULT_NORMALIZER, DEFAULT_STEP};

/// One axis of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisConfig {
    /// Cells stored on the positive side of the origin
    pub extent_pos: i64,
    /// Cells stored on the negative side; ignored unless `allow_negative`
    pub extent_neg: i64,
    /// Tick increment per cell
    pub step: i64,
    /// Modulus applied to tick values; must be non-zero
    pub normalizer: i64,
    pub allow_negative: bool,
}

impl AxisConfig {
    pub fn new(
        extent_pos: i64,
        extent_neg: i64,
        step: i64,
        normalizer: i64,
        allow_negative: bool,
    ) -> Self {
        Self {
            extent_pos,
            extent_neg,
            step,
            normalizer,
            allow_negative,
        }
    }

    /// Same extent on both sides of the origin
    pub fn symmetric(extent: i64, step: i64, normalizer: i64, allow_negative: bool) -> Self {
        Self::new(extent, extent, step, normalizer, allow_negative)
    }

    /// Positive-only axis with default step and normalizer
    pub fn positive(extent: i64) -> Self {
        Self::new(extent, 0, DEFAULT_STEP, DEFAULT_NORMALIZER, false)
    }

    /// Negative extent actually stored
    pub fn effective_neg(&self) -> i64 {
        if self.allow_negative {
            self.extent_neg
        } else {
            0
        }
    }

    /// Number of cells along this axis, origin included.
    ///
    /// `None` when the extents are negative or the count does not fit `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        let cells = self
            .extent_pos
            .checked_add(1)?
            .checked_add(self.effective_neg())?;
        usize::try_from(cells).ok().filter(|&n| n > 0)
    }

    /// Storage index of the origin along this axis
    pub fn origin(&self) -> usize {
        self.effective_neg() as usize
    }

    /// Map a logical coordinate to a storage index.
    ///
    /// `at` is the full coordinate, reported verbatim on error.
    pub(crate) fn index_of(
        &self,
        value: i64,
        at: (i64, i64),
        axis: Axis,
    ) -> Result<usize, GridError> {
        let out_of_range = |reason| GridError::OutOfRange {
            x: at.0,
            y: at.1,
            reason,
        };
        if value < 0 && !self.allow_negative {
            return Err(out_of_range(axis.negative_reason()));
        }
        if value > self.extent_pos || value < -self.effective_neg() {
            return Err(out_of_range(axis.bounds_reason()));
        }
        Ok((value + self.effective_neg()) as usize)
    }

    /// Label for the `i`-th tick away from the origin.
    ///
    /// The same label is used on both sides of the origin.
    pub fn tick_label(&self, i: i64) -> String {
        floor_mod(self.step.saturating_mul(i), self.normalizer).to_string()
    }

    pub(crate) fn validate(&self, axis: Axis) -> Result<(), GridError> {
        if self.normalizer == 0 {
            return Err(GridError::config(format!(
                "{} normalizer must be non-zero",
                axis.name()
            )));
        }
        if self.extent_pos < 0 || self.extent_neg < 0 {
            return Err(GridError::config(format!(
                "{} extents must be non-negative (got +{}, -{})",
                axis.name(),
                self.extent_pos,
                self.extent_neg
            )));
        }
        Ok(())
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self::positive(0)
    }
}

/// Full grid configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridConfig {
    pub x: AxisConfig,
    pub y: AxisConfig,
}

impl GridConfig {
    pub fn new(x: AxisConfig, y: AxisConfig) -> Self {
        Self { x, y }
    }

    /// Check both axes before anything is allocated
    pub fn validate(&self) -> Result<(), GridError> {
        self.dimensions().map(|_| ())
    }

    /// `(width, height)` in cells.
    ///
    /// Fails with `InvalidConfiguration` when either axis is invalid or the
    /// cell storage cannot be addressed.
    pub fn dimensions(&self) -> Result<(usize, usize), GridError> {
        self.x.validate(Axis::X)?;
        self.y.validate(Axis::Y)?;

        let overflow = || GridError::config("grid dimensions overflow");
        let width = self.x.cell_count().ok_or_else(overflow)?;
        let height = self.y.cell_count().ok_or_else(overflow)?;
        width
            .checked_mul(height)
            .filter(|&cells| cells <= isize::MAX as usize / mem::size_of::<String>())
            .ok_or_else(overflow)?;
        Ok((width, height))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

impl Axis {
    fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }

    fn negative_reason(self) -> &'static str {
        match self {
            Axis::X => "negative x not allowed",
            Axis::Y => "negative y not allowed",
        }
    }

    fn bounds_reason(self) -> &'static str {
        match self {
            Axis::X => "x beyond extent",
            Axis::Y => "y beyond extent",
        }
    }
}

/// Remainder with the sign of the divisor (`-3 mod 10 == 7`).
///
/// `divisor` must be non-zero.
pub fn floor_mod(value: i64, divisor: i64) -> i64 {
    let r = value.wrapping_rem(divisor);
    if r != 0 && (r < 0) != (divisor < 0) {
        r + divisor
    } else {
        r
    }
}
