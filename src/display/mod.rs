//! Display formatting for terminal output
//!
//! Tables for expense listings and the colored status lines printed after a
//! command runs.

pub mod expense;
pub mod output;

pub use expense::{format_expense_table, list_columns, Column, ViewMode, NO_EXPENSES};
