//! Grid core - coordinate mapping, validation and rendering
//!
//! This crate owns the labeled coordinate grid. It has no terminal or I/O
//! dependencies: rendering produces plain `String` rows and colors are
//! applied through the [`Decorate`] seam by whoever owns the terminal.
//!
//! # Module Structure
//!
//! - [`point`]: signed coordinates with their derived quarter, decorated points
//! - [`axis`]: per-axis extents, tick step and label modulus
//! - [`grid`]: storage, validated access and rendering
//! - [`decorate`]: the styled-token trait and a plain implementation
//! - [`snapshot`]: serializable grid view
//! - [`error`]: [`GridError`]
//!
//! # Example
//!
//! ```
//! use tui_chart_core::{AxisConfig, Grid, GridConfig, Point};
//!
//! let mut grid = Grid::new(GridConfig::new(
//!     AxisConfig::symmetric(2, 1, 10, true),
//!     AxisConfig::symmetric(1, 1, 10, false),
//! ))
//! .unwrap();
//!
//! grid.set(&Point::new(-1, 1), "*").unwrap();
//! assert_eq!(grid.render(), vec![" *1  ", "21012"]);
//!
//! // y is never negative on this grid
//! assert!(grid.get(&Point::new(0, -1)).is_err());
//! ```

pub mod axis;
pub mod decorate;
pub mod error;
pub mod grid;
mod log;
pub mod point;
pub mod snapshot;

pub use tui_chart_types as types;

// Re-export commonly used types for convenience
pub use axis::{floor_mod, AxisConfig, GridConfig};
pub use decorate::{Decorate, PlainDecorator};
pub use error::GridError;
pub use grid::{display_width, Grid};
pub use point::{enclosing_region, scalar_scale, Point, VisualPoint};
pub use snapshot::GridSnapshot;
