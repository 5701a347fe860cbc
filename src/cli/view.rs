//! Read-only views: `list` and `read`
//!
//! An unreadable store is reported and the view is left empty; nothing here
//! writes to the file.

use clap::Args;
use tracing::warn;

use crate::display::{format_expense_table, list_columns, output, Column, ViewMode};
use crate::error::TrackerResult;
use crate::storage::ExpenseStore;

use super::prompt::Prompter;

/// Options for `list`
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Include the amount column
    #[arg(long)]
    pub amount: bool,

    /// Include the category column
    #[arg(long)]
    pub category: bool,

    /// Include the date column
    #[arg(long)]
    pub date: bool,
}

/// Options for `read`
#[derive(Debug, Clone, Default, Args)]
pub struct ReadArgs {
    /// View to show (amount, category, date, description, all) without asking
    #[arg(long)]
    pub mode: Option<ViewMode>,
}

/// Render the `list` table
pub fn list_view(store: &ExpenseStore, args: &ListArgs) -> TrackerResult<String> {
    let columns = list_columns(args.amount, args.category, args.date);
    render(store, &columns)
}

pub fn handle_list(store: &ExpenseStore, args: ListArgs) -> TrackerResult<()> {
    print_view(list_view(store, &args))
}

/// Ask for a view mode (unless given) and render it
pub fn read_view(
    store: &ExpenseStore,
    prompter: &mut dyn Prompter,
    args: &ReadArgs,
) -> TrackerResult<Option<String>> {
    let mode = match args.mode {
        Some(mode) => mode,
        None => {
            let labels: Vec<String> = ViewMode::ALL.iter().map(ToString::to_string).collect();
            match prompter.select("Which fields do you want to see?", &labels)? {
                Some(index) => ViewMode::ALL[index],
                None => return Ok(None),
            }
        }
    };

    render(store, &mode.columns()).map(Some)
}

pub fn handle_read(
    store: &ExpenseStore,
    prompter: &mut dyn Prompter,
    args: ReadArgs,
) -> TrackerResult<()> {
    match read_view(store, prompter, &args) {
        Ok(None) => {
            output::notice("Nothing selected.");
            Ok(())
        }
        other => print_view(other.map(Option::unwrap_or_default)),
    }
}

fn render(store: &ExpenseStore, columns: &[Column]) -> TrackerResult<String> {
    let expenses = store.read_all()?;
    Ok(format_expense_table(&expenses, columns))
}

fn print_view(view: TrackerResult<String>) -> TrackerResult<()> {
    match view {
        Ok(table) => {
            println!("{}", table);
            Ok(())
        }
        Err(err) if err.is_read() => {
            warn!(error = %err, "showing empty view");
            output::error(&err);
            Ok(())
        }
        Err(err) => Err(err),
    }
}
