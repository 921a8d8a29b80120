//! Command parsing
//!
//! Turns the raw command tokens into a `Command`. Parsing is deliberately
//! lenient: `add` scans its tokens for the flags it knows and silently ignores
//! everything else.

use crate::types::ExpenseId;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// A parsed command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Record a new expense
    Add {
        description: String,
        amount: Decimal,
        category: Option<String>,
    },
    /// Remove the expense with this id
    Delete { id: ExpenseId },
    /// Print all expenses
    List,
    /// Print the total, optionally restricted to a month of the current year
    Summary { month: Option<u32> },
    /// No command given
    Usage,
}

/// Problems with the command line, caught before any expense is touched
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'.")]
    UnknownCommand(String),

    #[error("Missing arguments. Usage: add --description <desc> --amount <amount>")]
    MissingAddArguments,

    #[error("Invalid amount '{0}'.")]
    InvalidAmount(String),

    #[error("Missing ID. Usage: delete --id=<id>")]
    MissingId,

    #[error("Invalid ID.")]
    InvalidId,

    #[error("Invalid month.")]
    InvalidMonth,
}

impl Command {
    /// Parse command tokens, the first of which is the command name
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Command, CommandError> {
        let Some((name, args)) = tokens.split_first() else {
            return Ok(Command::Usage);
        };
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

        match name.as_ref() {
            "add" => parse_add(&args),
            "delete" => parse_delete(&args),
            "list" => Ok(Command::List),
            "summary" => parse_summary(&args),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_add(args: &[&str]) -> Result<Command, CommandError> {
    let mut description = None;
    let mut amount = None;
    let mut category = None;

    let mut tokens = args.iter();
    while let Some(token) = tokens.next() {
        let slot = match *token {
            "--description" => &mut description,
            "--amount" => &mut amount,
            "--category" => &mut category,
            _ => continue,
        };
        if let Some(value) = tokens.next() {
            *slot = Some(*value);
        }
    }

    let (Some(description), Some(amount)) = (description, amount) else {
        return Err(CommandError::MissingAddArguments);
    };

    Ok(Command::Add {
        description: description.to_string(),
        amount: parse_amount(amount)?,
        category: category.filter(|c| !c.is_empty()).map(str::to_string),
    })
}

fn parse_amount(value: &str) -> Result<Decimal, CommandError> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| CommandError::InvalidAmount(value.to_string()))
}

fn parse_delete(args: &[&str]) -> Result<Command, CommandError> {
    let value = option_value(args, "--id").ok_or(CommandError::MissingId)?;
    let id = value
        .parse::<ExpenseId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(CommandError::InvalidId)?;
    Ok(Command::Delete { id })
}

fn parse_summary(args: &[&str]) -> Result<Command, CommandError> {
    let Some(first) = args.first() else {
        return Ok(Command::Summary { month: None });
    };
    if *first != "--month" && !first.starts_with("--month=") {
        return Ok(Command::Summary { month: None });
    }

    let month = option_value(args, "--month")
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|month| (1..=12).contains(month))
        .ok_or(CommandError::InvalidMonth)?;
    Ok(Command::Summary { month: Some(month) })
}

/// Value of an option given as the first argument
///
/// Accepts `--name=value`, `--name value`, and a bare `value`.
fn option_value<'a>(args: &[&'a str], name: &str) -> Option<&'a str> {
    let first = *args.first()?;
    if first == name {
        return args.get(1).copied();
    }
    match first.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
        Some(value) => Some(value),
        None => Some(first),
    }
}
