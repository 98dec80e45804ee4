//! Output formatting for maze reports

use crate::executor::{MazeReport, TaskOutcome};
use chrono::TimeDelta;

/// Output formatter for maze reports
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single report
    pub fn print_report(&self, report: &MazeReport) {
        match &report.outcome {
            Ok(outcomes) if self.quiet => {
                for outcome in outcomes {
                    println!("{}", format_quiet(outcome));
                }
            }
            Ok(outcomes) => {
                println!("== {} ==", report.path.display());
                for outcome in outcomes {
                    print!("{}", format_full(outcome));
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    /// Print a summary after all reports
    pub fn print_summary(&self, reports: &[MazeReport]) {
        if self.quiet {
            return;
        }

        let total = reports.len();
        let failures = reports.iter().filter(|r| r.outcome.is_err()).count();

        let total_solve_time: TimeDelta = reports
            .iter()
            .filter_map(|r| r.outcome.as_ref().ok())
            .flatten()
            .map(TaskOutcome::duration)
            .sum();
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Mazes: {} processed, {} failed", total - failures, failures);
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
    }
}

/// Only the result value: `true`/`false` or the coin count
fn format_quiet(outcome: &TaskOutcome) -> String {
    match outcome {
        TaskOutcome::Traverse { solved, .. } => solved.to_string(),
        TaskOutcome::Collect { coins, .. } => coins.to_string(),
    }
}

/// The layout before, the result line, and the layout after
fn format_full(outcome: &TaskOutcome) -> String {
    match outcome {
        TaskOutcome::Traverse {
            before,
            solved,
            after,
            duration,
        } => {
            let verdict = if *solved {
                "Maze solved"
            } else {
                "Maze NOT solved"
            };
            format!(
                "TRAVERSE Maze:\n{}{} (solve: {})\n{}",
                before,
                verdict,
                format_duration(*duration),
                after
            )
        }
        TaskOutcome::Collect {
            before,
            coins,
            after,
            duration,
        } => format!(
            "PICK UP COINS Maze:\n{}Picked up coins: {} (solve: {})\n{}",
            before,
            coins,
            format_duration(*duration),
            after
        ),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    match TimeDelta::from_std(d) {
        Ok(delta) => format_duration(delta),
        Err(_) => "N/A".to_string(),
    }
}
