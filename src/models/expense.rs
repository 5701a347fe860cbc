//! Expense model
//!
//! An expense is one tracked spending entry. All fields other than the id can
//! be replaced by an update.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::validation::{normalize_category, validate_amount, validate_date, validate_description};
use crate::error::TrackerResult;

/// A single expense record as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, never changed after creation
    #[serde(default)]
    pub id: ExpenseId,

    /// Decimal amount, kept exactly as entered (e.g. "20.50")
    #[serde(deserialize_with = "amount_from_text_or_number")]
    pub amount: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: String,

    /// Date as `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
}

/// The mutable part of an expense, already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFields {
    pub amount: String,
    pub description: String,
    pub category: String,
    pub date: String,
}

impl ExpenseFields {
    /// Validate raw user input. The first failing field aborts.
    pub fn parse(amount: &str, description: &str, category: &str, date: &str) -> TrackerResult<Self> {
        Ok(Self {
            amount: validate_amount(amount)?,
            description: validate_description(description)?,
            category: normalize_category(category),
            date: validate_date(date)?,
        })
    }
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(fields: ExpenseFields) -> Self {
        Self {
            id: ExpenseId::new(),
            amount: fields.amount,
            description: fields.description,
            category: fields.category,
            date: fields.date,
        }
    }

    /// Replace every mutable field, keeping the id
    pub fn apply(&mut self, fields: ExpenseFields) {
        self.amount = fields.amount;
        self.description = fields.description;
        self.category = fields.category;
        self.date = fields.date;
    }

    /// Label shown in pickers
    pub fn label(&self) -> String {
        if self.description.is_empty() {
            "(no description)".to_string()
        } else {
            self.description.clone()
        }
    }

    /// Secondary text shown next to the label in pickers
    pub fn hint(&self) -> String {
        match (self.category.is_empty(), self.date.is_empty()) {
            (false, false) => format!("{} · {}", self.category, self.date),
            (false, true) => self.category.clone(),
            (true, false) => self.date.clone(),
            (true, true) => String::new(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} on {}",
            self.label(),
            self.category,
            self.amount,
            self.date
        )
    }
}

/// Early versions of the tool stored whatever the user typed, and some
/// hand-edited files hold the amount as a JSON number.
fn amount_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Text(text) => text,
        RawAmount::Number(number) => number.to_string(),
    })
}
