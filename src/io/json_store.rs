//! JSON file store
//!
//! This module provides `JsonFileStore`, the `ExpenseStore` implementation that
//! keeps the whole expense collection in a single JSON file.
//!
//! # Locking
//!
//! The store owns a mutex that is held for the duration of each `load` or
//! `save` call. Calls on the same store never interleave, but a load followed by
//! a save is not atomic as a pair. There is no cross-process locking.

use crate::core::traits::ExpenseStore;
use crate::io::json_format::{parse_expenses, render_expenses};
use crate::types::{Expense, ExpenseError};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Expense store backed by one JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store for the file at `path`
    ///
    /// The file is not touched until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    // The mutex guards no data, so a panic in another holder leaves nothing inconsistent.
    fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ExpenseStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Expense>, ExpenseError> {
        let _guard = self.acquire();

        if !self.path.exists() {
            info!("Data file {} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            ExpenseError::io(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        let expenses = parse_expenses(&content)?;

        debug!(
            "Loaded {} expenses from {}",
            expenses.len(),
            self.path.display()
        );
        Ok(expenses)
    }

    fn save(&self, expenses: &[Expense]) -> Result<(), ExpenseError> {
        let _guard = self.acquire();

        let content = render_expenses(expenses)?;
        fs::write(&self.path, content).map_err(|e| {
            ExpenseError::io(format!("failed to write {}: {}", self.path.display(), e))
        })?;

        debug!(
            "Saved {} expenses to {}",
            expenses.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    /// Helper function to create a temporary data file with the given content
    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn sample_expenses() -> Vec<Expense> {
        let date = DateTime::parse_from_rfc3339("2024-02-29T18:45:10.5+01:00").unwrap();
        vec![
            Expense::new(1, "coffee", Decimal::new(450, 2), date, None),
            Expense::new(2, "book", Decimal::new(1200, 2), date, Some("misc".into())),
        ]
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("expenses.json"));

        let expenses = store.load().unwrap();
        assert!(expenses.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("expenses.json"));

        store.save(&sample_expenses()).unwrap();
        assert_eq!(store.load().unwrap(), sample_expenses());
    }

    #[test]
    fn test_save_of_loaded_collection_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("expenses.json"));
        store.save(&sample_expenses()).unwrap();
        let first_content = fs::read_to_string(store.path()).unwrap();

        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), first_content);
        assert_eq!(store.load().unwrap(), loaded);
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let file = create_temp_file("[]");
        let store = JsonFileStore::new(file.path());

        store.save(&sample_expenses()).unwrap();
        store.save(&sample_expenses()[1..]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 2);
    }

    #[test]
    fn test_load_corrupt_file_is_format_error() {
        let file = create_temp_file("[{\"id\": 1,");
        let store = JsonFileStore::new(file.path());

        let result = store.load();
        assert!(matches!(result, Err(ExpenseError::Format { .. })));
    }

    #[test]
    fn test_load_unreadable_path_is_io_error() {
        // A directory exists but cannot be read as a file
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        let error = store.load().unwrap_err();
        assert!(matches!(error, ExpenseError::Io { .. }));
        assert!(error.to_string().contains("failed to read"));
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing").join("expenses.json"));

        let error = store.save(&sample_expenses()).unwrap_err();
        assert!(matches!(error, ExpenseError::Io { .. }));
        assert!(error.to_string().contains("failed to write"));
    }

    #[test]
    fn test_store_usable_across_threads() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("expenses.json"));
        store.save(&sample_expenses()).unwrap();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let loaded = store.load().unwrap();
                    store.save(&loaded).unwrap();
                });
            }
        });

        assert_eq!(store.load().unwrap(), sample_expenses());
    }
}
