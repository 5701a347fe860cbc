//! Storage layer for the expense tracker
//!
//! One JSON array file holds every expense. Writes go through a temp file and
//! a rename so a crash never leaves the store half written.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;
pub use file_io::{read_json, write_json_atomic};
