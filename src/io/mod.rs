//! I/O module
//!
//! Handles persistence of the expense collection.
//!
//! # Components
//!
//! - `json_format` - JSON format handling (parsing and pretty-printing)
//! - `json_store` - File-backed `ExpenseStore` implementation

pub mod json_format;
pub mod json_store;

pub use json_format::{parse_expenses, render_expenses};
pub use json_store::{JsonFileStore, DEFAULT_DATA_FILE};
