//! Expense tracker - record, list, update and remove expenses from the terminal
//!
//! Expenses live in a single JSON array file. Every command is one
//! read-modify-write of that file; missing command options are asked for
//! interactively.
//!
//! # Architecture
//!
//! - `config`: store location and logging setup
//! - `error`: custom error types
//! - `models`: the expense record and its field validation
//! - `storage`: JSON file store
//! - `cli`: command handlers and interactive prompts
//! - `display`: tables and colored messages
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::models::ExpenseFields;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let store = ExpenseStore::open("expenses.json")?;
//! let fields = ExpenseFields::parse("20.50", "lunch", "food", "2024-03-01")?;
//! let expense = store.append(fields)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
