//! Depth-first path search

use crate::cell::CellState;
use crate::error::MazeError;
use crate::maze::Maze;
use crate::position::{Direction, Position};

/// How a successful path search leaves the cells it walked through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMarking {
    /// Every explored cell is left `Visited`, including the ones on the path
    #[default]
    VisitedOnly,
    /// Cells on the successful chain, start through target, are rewritten to `Path`
    Backtrack,
}

/// One level of the depth-first walk: a cell and the next direction to try.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) pos: Position,
    next: usize,
}

impl Frame {
    pub(crate) fn new(pos: Position) -> Self {
        Self { pos, next: 0 }
    }

    /// Advance to the next direction, or `None` once all four were tried
    pub(crate) fn next_direction(&mut self) -> Option<Direction> {
        let direction = Direction::ALL.get(self.next).copied()?;
        self.next += 1;
        Some(direction)
    }
}

/// Search for the target starting at `start`.
///
/// Behaves exactly like the recursive formulation
///
/// ```text
/// visit(p):
///     if p is Wall or Visited: return false
///     mark p Visited
///     if p is target: return true
///     for n in north, east, south, west of p:
///         if n is valid and Open/GoldCoin and visit(n): return true
///     return false
/// ```
///
/// but keeps its frames on the heap, so large grids cannot exhaust the call
/// stack. Availability of a neighbor is checked when that neighbor's turn
/// comes, after earlier siblings have been fully explored.
pub fn find_path<M: Maze + ?Sized>(
    maze: &mut M,
    start: Option<Position>,
    marking: PathMarking,
) -> Result<bool, MazeError> {
    let Some(start) = start else {
        return Ok(false);
    };
    match maze.cell(start) {
        None | Some(CellState::Wall) | Some(CellState::Visited) => return Ok(false),
        Some(_) => {}
    }

    if enter(maze, start)? {
        mark_chain(maze, &[], start, marking)?;
        return Ok(true);
    }

    let mut stack = vec![Frame::new(start)];
    while let Some(frame) = stack.last_mut() {
        let Some(direction) = frame.next_direction() else {
            stack.pop();
            continue;
        };
        let Some(next) = frame.pos.step(direction) else {
            continue;
        };
        if !maze.is_available(next) {
            continue;
        }

        if enter(maze, next)? {
            mark_chain(maze, &stack, next, marking)?;
            return Ok(true);
        }
        stack.push(Frame::new(next));
    }

    Ok(false)
}

/// Mark `pos` visited and report whether it is the target
fn enter<M: Maze + ?Sized>(maze: &mut M, pos: Position) -> Result<bool, MazeError> {
    maze.mark_visited(pos)?;
    Ok(maze.is_target(pos))
}

fn mark_chain<M: Maze + ?Sized>(
    maze: &mut M,
    chain: &[Frame],
    target: Position,
    marking: PathMarking,
) -> Result<(), MazeError> {
    if marking == PathMarking::Backtrack {
        for frame in chain {
            maze.mark_path(frame.pos)?;
        }
        maze.mark_path(target)?;
    }
    Ok(())
}
