//! Expense Tracker Library
//! # Overview
//!
//! This library records, lists, deletes and summarizes personal expenses kept in
//! a single local JSON file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Expense, ExpenseError)
//! - [`cli`] - CLI arguments parsing, command parsing and output
//! - [`core`] - Business logic components:
//!   - [`core::traits`] - The storage abstraction
//!   - [`core::service`] - Validation, id assignment and summaries
//! - [`io`] - JSON file persistence
//!
//! # Operations
//!
//! - **Add**: Record an expense with a positive amount, dated now
//! - **Delete**: Remove an expense by id
//! - **List**: All expenses in stored order
//! - **Summary**: Total of all expenses, or of one month of the current year
//!
//! # Storage
//!
//! Every operation reads the whole file, and add/delete rewrite the whole file.
//! This suits small personal datasets only.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{ExpenseService, ExpenseStore};
pub use io::JsonFileStore;
pub use types::{Expense, ExpenseError, ExpenseId};
