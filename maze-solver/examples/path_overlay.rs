//! Path search with and without backtrack marking
//!
//! Runs the same maze twice from a snapshot: once leaving every explored
//! cell `Visited`, once rewriting the successful chain to `Path`.
//!
//! Run with: cargo run --example path_overlay

use maze_solver::{Maze, MazeSolver, ParseError, PathMarking};

const MAZE: &str = "\
size
6
grid
S 1 1 0 1 1
0 0 1 0 1 0
1 1 1 1 1 1
1 0 0 0 0 1
1 1 G 0 1 1
0 0 1 1 1 T
";

fn main() -> Result<(), ParseError> {
    println!("=== Path Overlay Example ===\n");

    let mut maze: MazeSolver = MAZE.parse()?;
    let layout = maze.snapshot();
    println!("Maze:\n{}", maze);

    let solved = maze.traverse().is_ok_and(|found| found);
    println!("Visited only (solved: {}):\n{}", solved, maze);

    let mut overlay = maze.with_path_marking(PathMarking::Backtrack);
    if overlay.restore(layout).is_ok() {
        let solved = overlay.traverse().is_ok_and(|found| found);
        println!(
            "{:?} marking (solved: {}):\n{}",
            overlay.path_marking(),
            solved,
            overlay
        );
    }

    Ok(())
}
