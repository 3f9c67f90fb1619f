//! Engine error types.

use derive_more::{Display, Error};

/// A `(row, col)` coordinate outside the 3x3 grid.
///
/// Occupied cells and moves after the round ended are not errors; the
/// engine ignores them. Only a coordinate that cannot name a cell is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell ({}, {}) is outside the 3x3 board", row, col)]
pub struct CellError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

impl CellError {
    /// Creates a new out-of-range error.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
