//! Error types for the expense tracker
//!
//! This module defines all error types that can occur while managing expenses.
//! Errors are designed to be descriptive and user-friendly for CLI output, where
//! they are printed once as `Error: <message>`.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Non-positive or unstorable amounts, months outside 1-12
//! - **Arithmetic Errors**: Totals or ids that no longer fit their type
//! - **Lookup Errors**: Deleting an expense that does not exist
//! - **File I/O Errors**: The data file exists but cannot be read or written
//! - **Format Errors**: The data file does not hold a valid list of expenses

use super::expense::ExpenseId;
use thiserror::Error;

/// Main error type for the expense tracker
///
/// Every failure of the storage and business layers is one of these variants.
/// None of them is recovered from: they propagate up to the front end.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpenseError {
    /// Input rejected by a business rule
    #[error("{message}")]
    Validation {
        /// Description of the violated rule
        message: String,
    },

    /// No expense with the requested id exists
    #[error("expense not found (ID: {id})")]
    NotFound {
        /// The id that was looked up
        id: ExpenseId,
    },

    /// A total or an id overflowed
    #[error("arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// What was being computed
        operation: String,
    },

    /// I/O error occurred while reading or writing the data file
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// The stored data could not be (de)serialized
    #[error("invalid expense data: {message}")]
    Format {
        /// Description of the format error
        message: String,
    },
}

impl From<std::io::Error> for ExpenseError {
    fn from(error: std::io::Error) -> Self {
        ExpenseError::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(error: serde_json::Error) -> Self {
        ExpenseError::Format {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ExpenseError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ExpenseError::Validation {
            message: message.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(id: ExpenseId) -> Self {
        ExpenseError::NotFound { id }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: impl Into<String>) -> Self {
        ExpenseError::ArithmeticOverflow {
            operation: operation.into(),
        }
    }

    /// Create an Io error
    pub fn io(message: impl Into<String>) -> Self {
        ExpenseError::Io {
            message: message.into(),
        }
    }

    /// Create a Format error
    pub fn format(message: impl Into<String>) -> Self {
        ExpenseError::Format {
            message: message.into(),
        }
    }
}
