//! Reading maze files from disk

use crate::error::CliError;
use maze_solver::MazeSolver;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read and parse the maze stored at `path`
pub fn load_maze(path: &Path) -> Result<MazeSolver, CliError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            CliError::NotFound(path.to_path_buf())
        } else {
            CliError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    content.parse().map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
