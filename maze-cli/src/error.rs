//! Error types for the CLI

use maze_solver::{MazeError, ParseError};
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Maze file does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Maze file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Maze file is not in the text maze format
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// Maze operation failed
    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),

    /// Executor error
    #[error("{0}")]
    Executor(#[from] ExecutorError),

    /// Some mazes could not be processed
    #[error("{failed} of {total} maze(s) failed")]
    Failed { failed: usize, total: usize },
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Worker thread panicked
    #[error("Executor thread panicked")]
    Panicked,
}
