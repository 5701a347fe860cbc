//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing and interactive prompts with the expense store.

pub mod expense;
pub mod fields;
pub mod prompt;
pub mod select;
pub mod view;

pub use expense::{handle_add, handle_remove, handle_update, RemoveArgs, UpdateArgs};
pub use fields::ExpenseArgs;
pub use prompt::{DialoguerPrompter, Prompter};
pub use view::{handle_list, handle_read, ListArgs, ReadArgs};
