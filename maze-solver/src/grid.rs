//! Square grid of cell states

use crate::cell::CellState;
use crate::error::{MazeError, ParseError};
use crate::position::Position;

/// An N x N matrix of [`CellState`], stored row-major.
///
/// Every mutation is bounds checked. Cloning produces an independent deep
/// copy, which is what a maze hands out as a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a `size` x `size` grid with every cell set to `fill`.
    ///
    /// A size of zero yields `ParseError::Empty`, a size whose cell count
    /// does not fit in `usize` yields `ParseError::InvalidFormat`.
    pub fn new(size: usize, fill: CellState) -> Result<Self, ParseError> {
        if size == 0 {
            return Err(ParseError::Empty);
        }
        let len = cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![fill; len],
        })
    }

    /// Build a grid from rows, rejecting empty and non-square input.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, ParseError> {
        let size = rows.len();
        if size == 0 {
            return Err(ParseError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.iter().map(Vec::len).sum());
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(ParseError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies inside `[0, size) x [0, size)`
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// State at `pos`, or `None` when out of bounds
    pub fn get(&self, pos: Position) -> Option<CellState> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite the state at `pos`
    pub fn set(&mut self, pos: Position, state: CellState) -> Result<(), MazeError> {
        let i = self.index(pos).ok_or(MazeError::InvalidPosition(pos))?;
        self.cells[i] = state;
        Ok(())
    }

    /// Rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size)
    }

    /// Number of cells currently in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row()).ok().filter(|&r| r < self.size)?;
        let col = usize::try_from(pos.col()).ok().filter(|&c| c < self.size)?;
        Some(row * self.size + col)
    }
}

/// Number of cells in a `size` x `size` grid
pub(crate) fn cell_count(size: usize) -> Result<usize, ParseError> {
    size.checked_mul(size).ok_or_else(|| {
        ParseError::InvalidFormat(format!("grid size {} is too large", size))
    })
}
