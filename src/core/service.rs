//! Expense service
//!
//! This module provides the ExpenseService that enforces the business rules of
//! the tracker on top of an `ExpenseStore`:
//! - Amounts must be positive and must survive being written to the data file
//! - Ids are assigned as the highest existing id plus one, gaps are never reused
//! - Monthly summaries only count expenses dated in the current calendar year
//!
//! Every operation loads the full collection from the store. Mutating
//! operations (add, delete) save the full collection back.

use crate::core::traits::ExpenseStore;
use crate::types::{is_storable_amount, Expense, ExpenseError, ExpenseId};
use chrono::{Datelike, Local};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Business-logic layer over an expense store
pub struct ExpenseService<S: ExpenseStore> {
    store: S,
}

impl<S: ExpenseStore> ExpenseService<S> {
    /// Create a new service that owns `store`
    pub fn new(store: S) -> Self {
        ExpenseService { store }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a new expense dated now and return its id
    ///
    /// An empty `category` is stored as no category.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative (nothing is loaded or saved)
    /// - `amount` is too large to be read back from the data file
    /// - Every id up to `ExpenseId::MAX` is taken
    /// - The store fails to load or save
    pub fn add_expense(
        &self,
        description: &str,
        amount: Decimal,
        category: Option<&str>,
    ) -> Result<ExpenseId, ExpenseError> {
        if amount <= Decimal::ZERO {
            return Err(ExpenseError::validation("amount must be positive"));
        }
        if !is_storable_amount(amount) {
            return Err(ExpenseError::validation("amount is too large"));
        }

        let mut expenses = self.store.load()?;
        let id = next_expense_id(&expenses)
            .ok_or_else(|| ExpenseError::arithmetic_overflow("id assignment"))?;

        expenses.push(Expense::new(
            id,
            description,
            amount,
            Local::now().fixed_offset(),
            category.map(str::to_string),
        ));
        self.store.save(&expenses)?;

        info!("Added expense {} ({})", id, amount);
        Ok(id)
    }

    /// Delete every expense with the given id
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NotFound` if no expense has this id, in which case
    /// the store is left untouched. Store errors are propagated.
    pub fn delete_expense(&self, id: ExpenseId) -> Result<(), ExpenseError> {
        let expenses = self.store.load()?;
        let original_len = expenses.len();

        let remaining: Vec<Expense> = expenses.into_iter().filter(|e| e.id != id).collect();
        if remaining.len() == original_len {
            return Err(ExpenseError::not_found(id));
        }

        self.store.save(&remaining)?;
        info!("Deleted expense {}", id);
        Ok(())
    }

    /// All expenses in stored order
    pub fn list_expenses(&self) -> Result<Vec<Expense>, ExpenseError> {
        self.store.load()
    }

    /// Sum of all expense amounts
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::ArithmeticOverflow` if the total does not fit a
    /// `Decimal`. Store errors are propagated.
    pub fn summary(&self) -> Result<Decimal, ExpenseError> {
        let expenses = self.store.load()?;
        let total = checked_total(expenses.iter().map(|e| e.amount))
            .ok_or_else(|| ExpenseError::arithmetic_overflow("summary"))?;
        debug!("Summary over {} expenses: {}", expenses.len(), total);
        Ok(total)
    }

    /// Sum of the amounts dated in `month` (1-12) of the current year
    ///
    /// Expenses from the same month of other years are not counted.
    pub fn monthly_summary(&self, month: u32) -> Result<Decimal, ExpenseError> {
        self.monthly_summary_for_year(month, Local::now().year())
    }

    /// Sum of the amounts dated in `month` (1-12) of `year`
    ///
    /// Dates are compared in the offset each expense was recorded with.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Validation` if `month` is not in 1-12 and
    /// `ExpenseError::ArithmeticOverflow` if the total does not fit a `Decimal`.
    /// Store errors are propagated.
    pub fn monthly_summary_for_year(
        &self,
        month: u32,
        year: i32,
    ) -> Result<Decimal, ExpenseError> {
        if !(1..=12).contains(&month) {
            return Err(ExpenseError::validation(format!("invalid month {}", month)));
        }

        let expenses = self.store.load()?;
        let amounts = expenses
            .iter()
            .filter(|e| e.date.month() == month && e.date.year() == year)
            .map(|e| e.amount);
        let total = checked_total(amounts)
            .ok_or_else(|| ExpenseError::arithmetic_overflow("monthly summary"))?;
        debug!("Summary for {}-{:02}: {}", year, month, total);
        Ok(total)
    }
}

/// Next free id: the highest id in `expenses` plus one, or 1 when empty
///
/// Returns `None` when the highest id is already `ExpenseId::MAX`.
pub fn next_expense_id(expenses: &[Expense]) -> Option<ExpenseId> {
    expenses.iter().map(|e| e.id).max().unwrap_or(0).checked_add(1)
}

fn checked_total(mut amounts: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    amounts.try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}
