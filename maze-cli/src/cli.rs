//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which explorations to run on each maze
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Mode {
    /// Path search on one fresh copy, then coin collection on another (default)
    #[default]
    Both,
    /// Path search only
    Traverse,
    /// Coin collection only
    Collect,
}

impl Mode {
    pub fn traverses(self) -> bool {
        matches!(self, Mode::Both | Mode::Traverse)
    }

    pub fn collects(self) -> bool {
        matches!(self, Mode::Both | Mode::Collect)
    }
}

/// Text maze runner
#[derive(Parser, Debug)]
#[command(name = "maze", about = "Search text mazes and collect their gold coins", version)]
pub struct Args {
    /// Maze files to load
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Explorations to run: both, traverse or collect
    #[arg(short, long, value_enum, default_value = "both")]
    pub mode: Mode,

    /// Rewrite the cells of a found path to PATH instead of leaving them VISITED
    #[arg(long)]
    pub mark_path: bool,

    /// Override the start position, as ROW,COL
    #[arg(long, value_name = "ROW,COL", allow_hyphen_values = true)]
    pub start: Option<String>,

    /// Override the target position, as ROW,COL
    #[arg(long, value_name = "ROW,COL", allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Number of threads used to process files in parallel
    #[arg(long)]
    pub threads: Option<usize>,

    /// Quiet mode - only output results
    #[arg(short, long)]
    pub quiet: bool,
}
