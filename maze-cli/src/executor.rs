//! Parallel executor for exploring maze files

use crate::cli::Mode;
use crate::config::Config;
use crate::error::{CliError, ExecutorError};
use crate::loader::load_maze;
use chrono::{TimeDelta, Utc};
use maze_solver::{Maze, MazeSolver, PathMarking, Position};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

/// Result of one exploration run on a fresh copy of a maze
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome {
    Traverse {
        before: String,
        solved: bool,
        after: String,
        duration: TimeDelta,
    },
    Collect {
        before: String,
        coins: u32,
        after: String,
        duration: TimeDelta,
    },
}

impl TaskOutcome {
    /// Time spent inside the exploration itself
    pub fn duration(&self) -> TimeDelta {
        match self {
            TaskOutcome::Traverse { duration, .. } | TaskOutcome::Collect { duration, .. } => {
                *duration
            }
        }
    }
}

/// Everything produced for one input file
#[derive(Debug)]
pub struct MazeReport {
    /// Position of the file on the command line
    pub index: usize,
    pub path: PathBuf,
    pub outcome: Result<Vec<TaskOutcome>, CliError>,
}

/// Settings shared by every worker
struct TaskConfig {
    mode: Mode,
    path_marking: PathMarking,
    start: Option<Position>,
    target: Option<Position>,
}

/// Parallel executor for maze files
pub struct Executor {
    files: Vec<PathBuf>,
    task_config: TaskConfig,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            files: config.files.clone(),
            task_config: TaskConfig {
                mode: config.mode,
                path_marking: config.path_marking,
                start: config.start,
                target: config.target,
            },
            thread_pool,
        })
    }

    /// Number of reports `execute` will send
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Process every file and send one report per file to the channel
    pub fn execute(&self, tx: Sender<MazeReport>) -> Result<(), ExecutorError> {
        let task_config = &self.task_config;

        self.thread_pool.install(|| {
            self.files
                .par_iter()
                .enumerate()
                .try_for_each(|(index, path)| {
                    let report = MazeReport {
                        index,
                        path: path.clone(),
                        outcome: run_file(path, task_config),
                    };
                    tx.send(report).map_err(|_| ExecutorError::ChannelSend)
                })
        })
    }
}

/// Load one file with the configured marking and start/target overrides
fn prepare(path: &Path, task_config: &TaskConfig) -> Result<MazeSolver, CliError> {
    let mut maze = load_maze(path)?.with_path_marking(task_config.path_marking);
    if let Some(start) = task_config.start {
        maze.set_start(start);
    }
    if let Some(target) = task_config.target {
        maze.set_target(target);
    }
    Ok(maze)
}

/// Load one file and run the selected explorations on it
fn run_file(path: &Path, task_config: &TaskConfig) -> Result<Vec<TaskOutcome>, CliError> {
    let maze = prepare(path, task_config)?;

    let mut outcomes = Vec::new();
    if task_config.mode.traverses() {
        outcomes.push(run_traverse(maze.clone())?);
    }
    if task_config.mode.collects() {
        outcomes.push(run_collect(maze)?);
    }
    Ok(outcomes)
}

fn run_traverse(mut maze: MazeSolver) -> Result<TaskOutcome, CliError> {
    let before = maze.render();
    let solve_start = Utc::now();
    let solved = maze.traverse()?;
    let solve_end = Utc::now();

    Ok(TaskOutcome::Traverse {
        before,
        solved,
        after: maze.render(),
        duration: solve_end - solve_start,
    })
}

fn run_collect(mut maze: MazeSolver) -> Result<TaskOutcome, CliError> {
    let before = maze.render();
    let solve_start = Utc::now();
    let coins = maze.collect_coins()?;
    let solve_end = Utc::now();

    Ok(TaskOutcome::Collect {
        before,
        coins,
        after: maze.render(),
        duration: solve_end - solve_start,
    })
}
