//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `expense`: The expense record and its identifier
//! - `error`: Error types for the expense tracker

pub mod error;
pub mod expense;

pub use error::ExpenseError;
pub use expense::{is_storable_amount, Expense, ExpenseId};
