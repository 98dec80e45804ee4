//! Error types for the maze library

use crate::position::Position;
use thiserror::Error;

/// Error type for operations on a loaded maze
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A mutation was attempted outside `[0, size) x [0, size)`
    #[error("Invalid position: {0}")]
    InvalidPosition(Position),
    /// A grid of the wrong size was handed back to a maze
    #[error("Grid size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Error type for building a grid from external input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// A grid token is neither a known letter nor a cell code
    #[error("Invalid cell '{token}' at row {row}, column {col}")]
    InvalidCell {
        token: String,
        row: usize,
        col: usize,
    },
    /// A row does not have as many columns as the grid has rows
    #[error("Row {row} has {len} columns, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    /// A grid needs at least one cell
    #[error("Grid is empty")]
    Empty,
}
