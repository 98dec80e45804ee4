//! Maze CLI - Command-line interface for searching text mazes

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod loader;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use error::{CliError, ExecutorError};
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let executor = Executor::new(&config)?;
    let total = executor.file_count();

    // Set up report channel
    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    // Display reports in input order using aggregator
    let formatter = OutputFormatter::new(config.quiet);
    let mut aggregator = aggregator::ReportAggregator::new(total);
    let mut reports = Vec::new();

    for report in rx {
        for ready in aggregator.add(report) {
            formatter.print_report(&ready);
            reports.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_report(&ready);
        reports.push(ready);
    }

    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected reports were received");
    }

    executor_handle
        .join()
        .map_err(|_| ExecutorError::Panicked)??;

    formatter.print_summary(&reports);

    let failed = reports.iter().filter(|r| r.outcome.is_err()).count();
    if failed > 0 {
        return Err(CliError::Failed { failed, total });
    }

    Ok(())
}
