//! Output rendering for the command line
//!
//! All writers take a `&mut dyn Write` so the runner can print to stdout and
//! tests can capture into a buffer.

use crate::types::{Expense, ExpenseId};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Display;
use std::io::{self, Write};

const USAGE: &str = "\
Usage: expense-tracker [--file <PATH>] [--log-level <LEVEL>] <command> [args]
Commands:
  add --description <desc> --amount <amount> [--category <category>]  Add a new expense
  delete --id=<id>                                                    Delete an expense
  list                                                                List all expenses
  summary [--month=<month>]                                           Show total expenses or for a specific month";

/// Format an amount as dollars with two decimals, e.g. `$16.50`
///
/// Midpoints round away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// Write the usage text
pub fn write_usage(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "{}", USAGE)
}

/// Write a one-line error message
pub fn write_error(output: &mut dyn Write, error: &dyn Display) -> io::Result<()> {
    writeln!(output, "Error: {}", error)
}

pub fn write_added(output: &mut dyn Write, id: ExpenseId) -> io::Result<()> {
    writeln!(output, "Expense added successfully (ID: {})", id)
}

pub fn write_deleted(output: &mut dyn Write, id: ExpenseId) -> io::Result<()> {
    writeln!(output, "Expense deleted successfully (ID: {})", id)
}

/// Write expenses as a tab-separated table
///
/// Columns: ID, Date (YYYY-MM-DD), Description, Amount, Category. The header
/// is written even when there are no expenses.
pub fn write_expense_table(expenses: &[Expense], output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "ID\tDate\t\tDescription\tAmount\tCategory")?;
    for expense in expenses {
        writeln!(
            output,
            "{}\t{}\t{}\t{}\t{}",
            expense.id,
            expense.date.format("%Y-%m-%d"),
            expense.description,
            format_amount(expense.amount),
            expense.category_label()
        )?;
    }
    Ok(())
}

/// Write a total, scoped to a month when one is given
pub fn write_total(output: &mut dyn Write, month: Option<u32>, total: Decimal) -> io::Result<()> {
    match month {
        Some(month) => writeln!(
            output,
            "Total expenses for month {}: {}",
            month,
            format_amount(total)
        ),
        None => writeln!(output, "Total expenses: {}", format_amount(total)),
    }
}
