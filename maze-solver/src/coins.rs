//! Exhaustive coin collection

use crate::cell::CellState;
use crate::error::MazeError;
use crate::maze::Maze;
use crate::position::Position;
use crate::traversal::Frame;

/// Visit every cell reachable from `start`, consuming gold coins on the way.
///
/// Equivalent to the recursive walk
///
/// ```text
/// collect(p):
///     if p is out of bounds: return 0
///     count = 1 if p holds a coin (and p becomes Open) else 0
///     mark p Visited
///     for n in north, east, south, west of p:
///         if n is valid and Open/GoldCoin: count += collect(n)
///     return count
/// ```
///
/// The start cell itself is not checked for walls: called directly on a
/// `Wall`, the wall is marked `Visited` and explored from.
pub fn collect_coins<M: Maze + ?Sized>(maze: &mut M, start: Position) -> Result<u32, MazeError> {
    if !maze.is_valid(start) {
        return Ok(0);
    }

    let mut coins = pick_up(maze, start)?;
    let mut stack = vec![Frame::new(start)];
    while let Some(frame) = stack.last_mut() {
        let Some(direction) = frame.next_direction() else {
            stack.pop();
            continue;
        };
        let Some(next) = frame.pos.step(direction) else {
            continue;
        };
        // Visited neighbors are excluded here, which bounds the walk to N² cells
        if !maze.is_available(next) {
            continue;
        }

        coins += pick_up(maze, next)?;
        stack.push(Frame::new(next));
    }

    Ok(coins)
}

/// Consume a coin at `pos` if there is one, then mark it visited
fn pick_up<M: Maze + ?Sized>(maze: &mut M, pos: Position) -> Result<u32, MazeError> {
    let found = maze.has_gold(pos);
    if found {
        maze.set_cell(pos, CellState::Open)?;
    }
    maze.mark_visited(pos)?;
    Ok(u32::from(found))
}
