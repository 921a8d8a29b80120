//! Benchmark suite for the JSON file store and summaries
//!
//! Every operation reads (and add/delete rewrite) the whole data file, so cost
//! grows with the number of stored expenses. These benchmarks measure that cost
//! using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! Datasets are generated into a temporary directory with 100, 1,000 and
//! 10,000 expenses.

use chrono::{DateTime, Duration};
use expense_tracker::{Expense, ExpenseService, ExpenseStore, JsonFileStore};
use rust_decimal::Decimal;
use tempfile::TempDir;

const SIZES: &[usize] = &[100, 1_000, 10_000];

fn main() {
    divan::main();
}

/// Create a data file holding `count` expenses
fn seeded_store(count: usize) -> (TempDir, JsonFileStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonFileStore::new(dir.path().join("expenses.json"));
    let start = DateTime::parse_from_rfc3339("2024-01-01T09:00:00+00:00").unwrap();

    let expenses: Vec<Expense> = (0..count)
        .map(|i| {
            let category = ["food", "travel", ""][i % 3].to_string();
            Expense::new(
                i as u32 + 1,
                format!("expense {}", i),
                Decimal::new(100 + (i as i64 % 5_000), 2),
                start + Duration::hours(i as i64),
                Some(category),
            )
        })
        .collect();
    store.save(&expenses).expect("Failed to seed store");
    (dir, store)
}

/// Benchmark loading the full collection
#[divan::bench(args = SIZES)]
fn load(bencher: divan::Bencher, count: usize) {
    let (_dir, store) = seeded_store(count);
    bencher.bench_local(|| store.load().expect("Load failed"));
}

/// Benchmark an add, which loads and rewrites the full collection
#[divan::bench(args = SIZES)]
fn add_expense(bencher: divan::Bencher, count: usize) {
    let (_dir, store) = seeded_store(count);
    let service = ExpenseService::new(store);
    bencher.bench_local(|| {
        service
            .add_expense("benchmark", Decimal::new(499, 2), Some("misc"))
            .expect("Add failed")
    });
}

/// Benchmark the monthly summary over the full collection
#[divan::bench(args = SIZES)]
fn monthly_summary(bencher: divan::Bencher, count: usize) {
    let (_dir, store) = seeded_store(count);
    let service = ExpenseService::new(store);
    bencher.bench_local(|| {
        service
            .monthly_summary_for_year(3, 2024)
            .expect("Summary failed")
    });
}
