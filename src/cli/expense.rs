//! Expense CLI commands
//!
//! `add`, `remove` and `update`: the commands that change the store.

use clap::Args;
use tracing::debug;

use crate::display::output;
use crate::display::NO_EXPENSES;
use crate::error::TrackerResult;
use crate::models::Expense;
use crate::storage::ExpenseStore;

use super::fields::ExpenseArgs;
use super::prompt::Prompter;
use super::select::{choose_expense, parse_id};

/// Options for `remove`
#[derive(Debug, Clone, Default, Args)]
pub struct RemoveArgs {
    /// Remove this id without asking
    #[arg(long)]
    pub id: Option<String>,
}

/// Options for `update`
#[derive(Debug, Clone, Default, Args)]
pub struct UpdateArgs {
    /// Update this id without asking which one
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub fields: ExpenseArgs,
}

/// Add a new expense, prompting for anything not given
pub fn handle_add(
    store: &ExpenseStore,
    prompter: &mut dyn Prompter,
    args: ExpenseArgs,
) -> TrackerResult<Expense> {
    let fields = args.resolve(prompter, None)?;
    let expense = store.append(fields)?;

    output::success(format!("Added expense: {} (id {})", expense, expense.id));
    Ok(expense)
}

/// Remove one expense chosen by id or from a picker
///
/// Returns the removed record, or `None` if nothing was removed.
pub fn handle_remove(
    store: &ExpenseStore,
    prompter: &mut dyn Prompter,
    args: RemoveArgs,
) -> TrackerResult<Option<Expense>> {
    if let Some(raw_id) = args.id {
        let id = parse_id(&raw_id)?;
        let target = store.get(&id)?;
        store.remove_by_id(&id)?;
        match &target {
            Some(expense) => output::success(format!("Removed expense: {}", expense)),
            None => output::notice(format!("No expense with id {}; nothing removed.", id)),
        }
        return Ok(target);
    }

    let Some(target) = choose_expense(store, prompter, None, "Which expense should be removed?")?
    else {
        report_nothing_chosen(store)?;
        return Ok(None);
    };

    store.remove_by_id(&target.id)?;
    output::success(format!("Removed expense: {}", target));
    Ok(Some(target))
}

/// Replace the fields of one expense
///
/// Missing flags are prompted for with the current values as defaults.
pub fn handle_update(
    store: &ExpenseStore,
    prompter: &mut dyn Prompter,
    args: UpdateArgs,
) -> TrackerResult<Option<Expense>> {
    let Some(target) = choose_expense(
        store,
        prompter,
        args.id.as_deref(),
        "Which expense should be updated?",
    )?
    else {
        report_nothing_chosen(store)?;
        return Ok(None);
    };

    debug!(id = %target.id, "updating expense");
    let fields = args.fields.resolve(prompter, Some(&target))?;
    let updated = store.update_by_id(&target.id, fields)?;

    output::success(format!("Updated expense: {}", updated));
    Ok(Some(updated))
}

const NO_SELECTABLE: &str = "No expenses can be picked: the stored records have no id.";
const NOTHING_SELECTED: &str = "Nothing selected; no changes made.";

fn report_nothing_chosen(store: &ExpenseStore) -> TrackerResult<()> {
    output::notice(nothing_chosen_reason(store)?);
    Ok(())
}

/// Why the picker produced no target
fn nothing_chosen_reason(store: &ExpenseStore) -> TrackerResult<&'static str> {
    let expenses = store.read_all()?;
    Ok(if expenses.is_empty() {
        NO_EXPENSES
    } else if expenses.iter().all(|e| e.id.is_empty()) {
        NO_SELECTABLE
    } else {
        NOTHING_SELECTED
    })
}
