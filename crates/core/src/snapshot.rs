use serde::Serialize;

/// Point-in-time view of a grid for machine consumers.
///
/// `rows` is the rendered text, largest `y` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    pub origin_col: usize,
    pub origin_row: usize,
    pub rows: Vec<String>,
}
