// CLI module
// Command-line interface, command parsing and output

mod args;
pub mod command;
pub mod output;

pub use args::CliArgs;
pub use command::{Command, CommandError};

use crate::core::{ExpenseService, ExpenseStore};
use crate::types::ExpenseError;
use clap::Parser;
use std::io::{self, Write};
use tracing::debug;

/// Parse command-line arguments using clap
///
/// On invalid global options, `--help` or `--version`, clap prints its own
/// message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run one command against `service`, writing everything user-facing to `out`
///
/// Command-line mistakes and expense errors are reported as `Error: <message>`
/// lines and are not returned: the only error this returns is a failure to
/// write to `out`.
pub fn run<S: ExpenseStore>(
    tokens: &[String],
    service: &ExpenseService<S>,
    out: &mut dyn Write,
) -> io::Result<()> {
    let command = match Command::parse(tokens) {
        Ok(command) => command,
        Err(e @ CommandError::UnknownCommand(_)) => {
            output::write_error(out, &e)?;
            return output::write_usage(out);
        }
        Err(e) => {
            debug!("Rejected command line {:?}: {}", tokens, e);
            return output::write_error(out, &e);
        }
    };

    execute(&command, service, out)
}

/// Execute an already parsed command
pub fn execute<S: ExpenseStore>(
    command: &Command,
    service: &ExpenseService<S>,
    out: &mut dyn Write,
) -> io::Result<()> {
    debug!("Executing {:?}", command);

    match dispatch(command, service, out) {
        Ok(written) => written,
        Err(e) => {
            debug!("Command failed: {:?}", e);
            output::write_error(out, &e)
        }
    }
}

// Outer error: the service refused. Inner error: writing the output failed.
fn dispatch<S: ExpenseStore>(
    command: &Command,
    service: &ExpenseService<S>,
    out: &mut dyn Write,
) -> Result<io::Result<()>, ExpenseError> {
    let written = match command {
        Command::Usage => output::write_usage(out),
        Command::Add {
            description,
            amount,
            category,
        } => {
            let id = service.add_expense(description, *amount, category.as_deref())?;
            output::write_added(out, id)
        }
        Command::Delete { id } => {
            service.delete_expense(*id)?;
            output::write_deleted(out, *id)
        }
        Command::List => {
            let expenses = service.list_expenses()?;
            output::write_expense_table(&expenses, out)
        }
        Command::Summary { month: Some(month) } => {
            let total = service.monthly_summary(*month)?;
            output::write_total(out, Some(*month), total)
        }
        Command::Summary { month: None } => {
            let total = service.summary()?;
            output::write_total(out, None, total)
        }
    };
    Ok(written)
}
