//! Core business logic module
//!
//! This module contains the expense management components:
//! - `traits` - The storage abstraction the business rules run against
//! - `service` - Business rules (validation, id assignment, summaries)

pub mod service;
pub mod traits;

pub use service::{next_expense_id, ExpenseService};
pub use traits::ExpenseStore;
