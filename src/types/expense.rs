//! Expense record type
//!
//! This module defines the single persisted entity of the tracker together with
//! its JSON representation. Field order in the struct is the field order written
//! to disk.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Expense identifier
///
/// Ids are positive and assigned as the highest existing id plus one.
pub type ExpenseId = u32;

/// One recorded expense
///
/// The `date` keeps the UTC offset it was created with, so a record written in
/// one timezone is read back with the same calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique id within the collection
    pub id: ExpenseId,

    /// Free-form description
    pub description: String,

    /// Amount spent, always positive for records created through the service
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Creation timestamp
    pub date: DateTime<FixedOffset>,

    /// Optional category, omitted from the JSON when absent
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_category"
    )]
    pub category: Option<String>,
}

impl Expense {
    /// Create a new expense, treating an empty category as no category
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Decimal,
        date: DateTime<FixedOffset>,
        category: Option<String>,
    ) -> Self {
        Expense {
            id,
            description: description.into(),
            amount,
            date,
            category: category.filter(|c| !c.is_empty()),
        }
    }

    /// The category as displayed in listings (empty when absent)
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize)]
struct StoredAmount(#[serde(with = "rust_decimal::serde::float")] Decimal);

/// Whether `amount` can be read back after being written as a JSON number
///
/// Amounts are stored as `f64`. Values close to `Decimal::MAX` round to a float
/// that no longer fits a `Decimal`.
pub fn is_storable_amount(amount: Decimal) -> bool {
    serde_json::to_value(StoredAmount(amount))
        .and_then(serde_json::from_value::<StoredAmount>)
        .is_ok()
}

fn deserialize_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let category: Option<String> = Option::deserialize(deserializer)?;
    Ok(category.filter(|c| !c.is_empty()))
}
