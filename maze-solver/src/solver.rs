//! The concrete maze

use crate::cell::CellState;
use crate::coins;
use crate::error::MazeError;
use crate::grid::Grid;
use crate::maze::Maze;
use crate::position::Position;
use crate::traversal::{self, PathMarking};
use std::fmt;

/// A maze that owns its grid and the start/target positions.
///
/// The grid is only reachable through shared borrows and bounds-checked
/// setters, so an outside editor can never hold an alias into it. To run
/// several traversals over the same layout, take a [`Maze::snapshot`] first
/// and [`MazeSolver::restore`] it between runs.
///
/// # Example
///
/// ```
/// use maze_solver::{Maze, MazeSolver};
///
/// let mut maze: MazeSolver = "size\n3\ngrid\nS 1 G\n0 0 1\nG 1 T\n".parse().unwrap();
/// let layout = maze.snapshot();
///
/// assert!(maze.traverse().unwrap());
///
/// maze.restore(layout).unwrap();
/// assert_eq!(maze.collect_coins().unwrap(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeSolver {
    grid: Grid,
    start: Position,
    target: Position,
    path_marking: PathMarking,
}

impl MazeSolver {
    pub fn new(grid: Grid, start: Position, target: Position) -> Self {
        Self {
            grid,
            start,
            target,
            path_marking: PathMarking::default(),
        }
    }

    /// Choose how a successful path search marks the cells it walked through
    pub fn with_path_marking(mut self, path_marking: PathMarking) -> Self {
        self.path_marking = path_marking;
        self
    }

    /// Marking mode used by [`Maze::traverse_from`]
    pub fn path_marking(&self) -> PathMarking {
        self.path_marking
    }

    /// Put back a grid previously taken with [`Maze::snapshot`].
    ///
    /// # Returns
    /// * `Err(MazeError::SizeMismatch)` - The snapshot has a different size
    pub fn restore(&mut self, snapshot: Grid) -> Result<(), MazeError> {
        if snapshot.size() != self.grid.size() {
            return Err(MazeError::SizeMismatch {
                expected: self.grid.size(),
                actual: snapshot.size(),
            });
        }
        self.grid = snapshot;
        Ok(())
    }

    /// Flip a cell between `Wall` and `Open`, returning the new state.
    ///
    /// Cells in any other state are left as they are.
    pub fn toggle_wall(&mut self, pos: Position) -> Result<CellState, MazeError> {
        let current = self.cell(pos).ok_or(MazeError::InvalidPosition(pos))?;
        let toggled = match current {
            CellState::Open => CellState::Wall,
            CellState::Wall => CellState::Open,
            other => other,
        };
        self.grid.set(pos, toggled)?;
        Ok(toggled)
    }
}

impl Maze for MazeSolver {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    fn start(&self) -> Position {
        self.start
    }

    fn set_start(&mut self, pos: Position) {
        self.start = pos;
    }

    fn target(&self) -> Position {
        self.target
    }

    fn set_target(&mut self, pos: Position) {
        self.target = pos;
    }

    fn set_cell(&mut self, pos: Position, state: CellState) -> Result<(), MazeError> {
        self.grid.set(pos, state)
    }

    fn traverse_from(&mut self, pos: Option<Position>) -> Result<bool, MazeError> {
        let marking = self.path_marking;
        traversal::find_path(self, pos, marking)
    }

    fn collect_coins_from(&mut self, pos: Position) -> Result<u32, MazeError> {
        coins::collect_coins(self, pos)
    }
}

impl fmt::Display for MazeSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
