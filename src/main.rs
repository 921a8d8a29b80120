//! Expense Tracker CLI
//!
//! Command-line interface for recording and summarizing personal expenses.
//!
//! # Usage
//!
//! ```bash
//! expense-tracker add --description coffee --amount 4.50 --category food
//! expense-tracker list
//! expense-tracker delete --id=1
//! expense-tracker summary --month=3
//! expense-tracker --file ~/expenses.json --log-level debug summary
//! ```
//!
//! Results and errors are printed to stdout. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Command handled, including commands that were rejected with an `Error:` line
//! - 1: Output could not be written
//! - 2: Invalid global options (reported by clap)

use expense_tracker::cli;
use expense_tracker::{ExpenseService, JsonFileStore};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse_args();
    init_logger(args.log_level);
    debug!("Using data file {}", args.store_path().display());

    // The service owns the store for the lifetime of the single command
    let service = ExpenseService::new(JsonFileStore::new(args.store_path()));

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli::run(args.command_tokens(), &service, &mut stdout) {
        error!("Failed to write output: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // RUST_LOG does not exist; use the requested level for this crate only.
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
