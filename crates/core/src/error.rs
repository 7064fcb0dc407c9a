//! Error types for grid construction and cell access.

use thiserror::Error;

/// Errors returned by [`Grid`](crate::grid::Grid) and the point constructors.
///
/// Every variant is deterministic for a given input; retrying never helps.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Construction parameters that can never describe a grid.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A coordinate outside the grid's extents or sign policy.
    #[error("coordinate ({x}, {y}) out of range: {reason}")]
    OutOfRange {
        x: i64,
        y: i64,
        reason: &'static str,
    },

    /// A cell value that does not occupy exactly one display column.
    #[error("token {token:?} is {width} cells wide, expected 1")]
    InvalidToken { token: String, width: usize },
}

impl GridError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        GridError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// True for [`GridError::OutOfRange`]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, GridError::OutOfRange { .. })
    }
}
