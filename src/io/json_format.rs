//! JSON format handling for the expense data file
//!
//! This module centralizes all file format concerns:
//! - Parsing the file content into expenses
//! - Rendering expenses as pretty-printed JSON (2-space indentation)
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Expense, ExpenseError};

/// Parse the content of a data file into expenses
///
/// The content must be a JSON array of expense objects. A `null` document is
/// accepted as an empty collection.
///
/// # Errors
///
/// Returns `ExpenseError::Format` if the content is not valid JSON or does not
/// describe a list of expenses.
pub fn parse_expenses(content: &str) -> Result<Vec<Expense>, ExpenseError> {
    let expenses: Option<Vec<Expense>> = serde_json::from_str(content)?;
    Ok(expenses.unwrap_or_default())
}

/// Render expenses as the content of a data file
///
/// Output is pretty-printed with 2-space indentation and keeps the order of
/// `expenses`. No trailing newline is written.
pub fn render_expenses(expenses: &[Expense]) -> Result<String, ExpenseError> {
    Ok(serde_json::to_string_pretty(expenses)?)
}
