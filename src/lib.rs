//! tui-chart (workspace facade crate).
//!
//! Re-exports the grid crates as `tui_chart::{types, core, term}` and hosts
//! the command-line surface used by the `tui-chart` binary.

pub mod cli;

pub use tui_chart_core as core;
pub use tui_chart_term as term;
pub use tui_chart_types as types;
