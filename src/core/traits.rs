//! Core traits for expense persistence
//!
//! This module defines the trait abstraction that separates business rules from
//! the storage backend, so the service can run against the JSON file store in
//! production and an in-memory store in tests.

use crate::types::{Expense, ExpenseError};

/// Trait for loading and saving the full expense collection
///
/// Implementations always work on the whole collection: every load returns all
/// records in stored order, every save replaces everything that was stored.
pub trait ExpenseStore: Send + Sync {
    /// Load every stored expense, or an empty list when nothing has been stored yet
    fn load(&self) -> Result<Vec<Expense>, ExpenseError>;

    /// Replace the stored collection with `expenses`
    fn save(&self, expenses: &[Expense]) -> Result<(), ExpenseError>;
}
