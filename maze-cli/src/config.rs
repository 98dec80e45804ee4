//! Configuration resolution from CLI args

use crate::cli::{Args, Mode};
use crate::error::CliError;
use maze_solver::{PathMarking, Position};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Maze files, with `~` expanded
    pub files: Vec<PathBuf>,
    /// Explorations to run on each maze
    pub mode: Mode,
    /// How path search marks a found path
    pub path_marking: PathMarking,
    /// Start position override
    pub start: Option<Position>,
    /// Target position override
    pub target: Option<Position>,
    /// Number of threads for processing files
    pub thread_count: usize,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let files = args.files.iter().map(|f| expand_tilde(f)).collect();

        let thread_count = match args.threads {
            Some(0) => return Err(CliError::Config("--threads must be at least 1".to_string())),
            Some(n) => n,
            None => num_cpus(),
        };

        let path_marking = if args.mark_path {
            PathMarking::Backtrack
        } else {
            PathMarking::VisitedOnly
        };

        Ok(Config {
            files,
            mode: args.mode,
            path_marking,
            start: parse_override("--start", args.start.as_deref())?,
            target: parse_override("--target", args.target.as_deref())?,
            thread_count,
            quiet: args.quiet,
        })
    }
}

/// Parse an optional `ROW,COL` override
fn parse_override(flag: &str, value: Option<&str>) -> Result<Option<Position>, CliError> {
    value
        .map(|v| {
            v.parse::<Position>()
                .map_err(|e| CliError::Config(format!("{} {}: {}", flag, v, e)))
        })
        .transpose()
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        Config::from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_overrides_are_parsed() {
        let cfg = config(&["maze", "--start", "1,2", "--target", "(3, 4)", "m.txt"]).unwrap();
        assert_eq!(cfg.start, Some(Position::new(1, 2)));
        assert_eq!(cfg.target, Some(Position::new(3, 4)));
        assert_eq!(cfg.path_marking, PathMarking::VisitedOnly);
        assert!(cfg.thread_count >= 1);
    }

    #[test]
    fn test_bad_override_is_rejected() {
        let err = config(&["maze", "--start", "one,two", "m.txt"]).unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.starts_with("--start one,two")));
    }

    #[test]
    fn test_mark_path_and_threads() {
        let cfg = config(&["maze", "--mark-path", "--threads", "3", "m.txt"]).unwrap();
        assert_eq!(cfg.path_marking, PathMarking::Backtrack);
        assert_eq!(cfg.thread_count, 3);
        assert!(config(&["maze", "--threads", "0", "m.txt"]).is_err());
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("mazes/a.txt")), PathBuf::from("mazes/a.txt"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/a.txt")), home.join("a.txt"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
