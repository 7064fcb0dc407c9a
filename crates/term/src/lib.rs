//! Terminal layer for the grid.
//!
//! This crate owns everything that knows about ANSI escape codes or stdout:
//! - [`style`]: the ANSI implementation of the token decoration seam
//! - [`renderer`]: emitting rendered rows to the terminal
//!
//! The grid core stays free of terminal concerns.

pub mod renderer;
pub mod style;

pub use tui_chart_core as core;
pub use tui_chart_types as types;

pub use renderer::{draw, encode_rows_into, GridPrinter};
pub use style::{to_crossterm, AnsiDecorator, StyledText};
