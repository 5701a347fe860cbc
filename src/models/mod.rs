//! Core data models for the expense tracker
//!
//! The expense record, its identifier, and the field checks that every new or
//! updated record must pass.

pub mod expense;
pub mod ids;
pub mod validation;

pub use expense::{Expense, ExpenseFields};
pub use ids::ExpenseId;
pub use validation::{validate_amount, validate_date, validate_description, MAX_DESCRIPTION_LEN};
