//! Error types for lasergrid.

use thiserror::Error;

/// Result alias for lasergrid operations.
pub type Result<T> = std::result::Result<T, LaserError>;

/// Errors that can occur when loading grids or placing lasers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaserError {
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The requested number of lasers is zero or negative.
    #[error("invalid laser count {count}: at least one laser is required")]
    InvalidLaserCount { count: i64 },
    /// A grid row does not have as many cells as the grid has rows.
    #[error("grid is not square: row {row} has {len} cells, expected {expected}")]
    NonSquareGrid {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A grid cell is too large in magnitude for three-cell sums to fit.
    #[error("cell {value} at row {row}, column {column} exceeds the supported magnitude")]
    CellOutOfRange {
        row: usize,
        column: usize,
        value: i64,
    },
    /// A grid cell could not be parsed as an integer.
    #[error("invalid cell {token:?} on line {line}")]
    InvalidCell { line: usize, token: String },
    /// The grid file could not be read.
    #[error("grid io error: {reason}")]
    GridIo { reason: String },
}
