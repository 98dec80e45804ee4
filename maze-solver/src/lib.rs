//! Maze Solver Library
//!
//! Square grid mazes with two deterministic depth-first explorations:
//! finding a path from a start cell to a target cell, and visiting every
//! reachable cell to pick up gold coins.
//!
//! # Overview
//!
//! This library provides:
//! - [`Position`] and [`Direction`] value types
//! - A bounds-checked square [`Grid`] of [`CellState`]s
//! - The [`Maze`] trait with derived predicates, marking and text rendering
//! - [`MazeSolver`], the concrete maze, with snapshot/restore and wall editing
//! - A parser for the text maze format ([`parse_maze`])
//!
//! # Quick Example
//!
//! ```
//! use maze_solver::{CellState, Maze, MazeSolver, Position};
//!
//! let input = "size\n3\ngrid\nS 1 1\n0 0 G\n1 1 T\n";
//! let mut maze: MazeSolver = input.parse().unwrap();
//!
//! assert!(maze.traverse().unwrap());
//! assert_eq!(maze.cell(Position::new(2, 2)), Some(CellState::Visited));
//! print!("{}", maze);
//! ```
//!
//! # Key Concepts
//!
//! ## Neighbor Order
//!
//! Both explorations try neighbors North, East, South, West. The resulting
//! grids depend on that order, so repeated runs on the same input always
//! produce the same result.
//!
//! ## Explicit Stacks
//!
//! The explorations are depth-first but keep their frames on the heap, so
//! grids of any size can be searched without exhausting the call stack. The
//! order in which cells change state is the same as for the textbook
//! recursive formulation.
//!
//! ## Path Marking
//!
//! By default a successful search leaves every explored cell `Visited`.
//! [`PathMarking::Backtrack`] additionally rewrites the cells of the
//! successful chain to `Path`.

mod cell;
mod coins;
mod error;
mod grid;
mod maze;
mod parser;
mod position;
mod solver;
mod traversal;

// Re-export public API
pub use cell::CellState;
pub use coins::collect_coins;
pub use error::{MazeError, ParseError};
pub use grid::Grid;
pub use maze::Maze;
pub use parser::parse_maze;
pub use position::{Direction, Position};
pub use solver::MazeSolver;
pub use traversal::{PathMarking, find_path};
