//! Core maze trait and derived queries

use crate::cell::CellState;
use crate::error::MazeError;
use crate::grid::Grid;
use crate::position::Position;

/// Core trait that every maze must implement.
///
/// Implementors supply storage for the grid and the start/target positions,
/// one bounds-checked mutation primitive ([`Maze::set_cell`]) and the two
/// traversals. Everything else (predicates, marking, rendering, default entry
/// points) is derived from those primitives.
///
/// # Example
///
/// ```
/// use maze_solver::{CellState, Grid, Maze, MazeSolver, Position};
///
/// let grid = Grid::new(2, CellState::Open).unwrap();
/// let mut maze = MazeSolver::new(grid, Position::new(0, 0), Position::new(1, 1));
///
/// assert!(maze.is_available(Position::new(0, 1)));
/// assert!(!maze.is_valid(Position::new(2, 0)));
/// assert!(maze.traverse().unwrap());
/// assert_eq!(maze.cell(Position::new(0, 0)), Some(CellState::Visited));
/// ```
pub trait Maze {
    /// Shared view of the grid. Use [`Maze::snapshot`] for an owned copy.
    fn grid(&self) -> &Grid;

    /// Replace the whole grid
    fn set_grid(&mut self, grid: Grid);

    fn start(&self) -> Position;

    fn set_start(&mut self, pos: Position);

    fn target(&self) -> Position;

    fn set_target(&mut self, pos: Position);

    /// Overwrite a single cell.
    ///
    /// # Returns
    /// * `Ok(())` - The cell was updated
    /// * `Err(MazeError::InvalidPosition)` - `pos` is outside the grid
    fn set_cell(&mut self, pos: Position, state: CellState) -> Result<(), MazeError>;

    /// Search for a path from `pos` to the target.
    ///
    /// Explored cells are marked `Visited`. An absent or out-of-bounds
    /// position yields `false` without touching the grid.
    ///
    /// # Returns
    /// * `Ok(true)` - The target was reached
    /// * `Ok(false)` - No path exists from `pos`
    fn traverse_from(&mut self, pos: Option<Position>) -> Result<bool, MazeError>;

    /// Visit every cell reachable from `pos`, picking up gold coins.
    ///
    /// # Returns
    /// * `Ok(n)` - Number of coins picked up; `0` when `pos` is out of bounds
    fn collect_coins_from(&mut self, pos: Position) -> Result<u32, MazeError>;

    /// Number of rows; grids are square.
    fn size(&self) -> usize {
        self.grid().size()
    }

    /// State at `pos`, or `None` when out of bounds
    fn cell(&self, pos: Position) -> Option<CellState> {
        self.grid().get(pos)
    }

    fn is_target(&self, pos: Position) -> bool {
        pos == self.target()
    }

    /// True when `0 <= row < size` and `0 <= col < size`
    fn is_valid(&self, pos: Position) -> bool {
        self.grid().contains(pos)
    }

    /// True when `pos` is valid and either `Open` or holding a gold coin
    fn is_available(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(CellState::is_available)
    }

    fn has_gold(&self, pos: Position) -> bool {
        self.cell(pos) == Some(CellState::GoldCoin)
    }

    fn mark_visited(&mut self, pos: Position) -> Result<(), MazeError> {
        self.set_cell(pos, CellState::Visited)
    }

    fn mark_path(&mut self, pos: Position) -> Result<(), MazeError> {
        self.set_cell(pos, CellState::Path)
    }

    /// Search from the start position. See [`Maze::traverse_from`].
    fn traverse(&mut self) -> Result<bool, MazeError> {
        let start = self.start();
        self.traverse_from(Some(start))
    }

    /// Collect from the start position. See [`Maze::collect_coins_from`].
    fn collect_coins(&mut self) -> Result<u32, MazeError> {
        let start = self.start();
        self.collect_coins_from(start)
    }

    /// Deep copy of the current grid, for restoring before another run
    fn snapshot(&self) -> Grid {
        self.grid().clone()
    }

    /// Text rendering, one `[...]` line per row.
    ///
    /// Open cells at the start and target render as `S` and `T`. The text
    /// starts directly with the first row, with no leading blank line, and
    /// every row ends in `\n`.
    fn render(&self) -> String {
        let grid = self.grid();
        let start = self.start();
        let target = self.target();
        let mut out = String::with_capacity(grid.size() * (grid.size() * 3 + 3));

        for (r, row) in grid.rows().enumerate() {
            out.push('[');
            for (c, &state) in row.iter().enumerate() {
                let pos = Position::new(r as i32, c as i32);
                let symbol = match state {
                    CellState::Open if pos == start => 'S',
                    CellState::Open if pos == target => 'T',
                    other => other.symbol(),
                };
                out.push(' ');
                out.push(symbol);
                out.push(' ');
            }
            out.push_str("]\n");
        }
        out
    }
}
