//! Picking an existing expense

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseId};
use crate::storage::ExpenseStore;

use super::prompt::Prompter;

/// Picker row: description first, category and date as a hint
pub fn render_label(expense: &Expense) -> String {
    let hint = expense.hint();
    if hint.is_empty() {
        expense.label()
    } else {
        format!("{} ({})", expense.label(), hint)
    }
}

/// An id given on the command line; blank ids would match legacy records
pub fn parse_id(raw: &str) -> TrackerResult<ExpenseId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TrackerError::Validation("--id must not be empty".into()));
    }
    Ok(ExpenseId::from_raw(raw))
}

/// Resolve the target expense from `--id`, or let the user pick one
///
/// Returns `None` when there is nothing to pick or the user backs out.
/// Records without an id cannot be targeted and are left out.
pub fn choose_expense(
    store: &ExpenseStore,
    prompter: &mut dyn Prompter,
    id: Option<&str>,
    prompt: &str,
) -> TrackerResult<Option<Expense>> {
    if let Some(id) = id {
        let id = parse_id(id)?;
        return store
            .get(&id)?
            .map(Some)
            .ok_or_else(|| TrackerError::expense_not_found(id.as_str()));
    }

    let expenses: Vec<Expense> = store
        .read_all()?
        .into_iter()
        .filter(|e| !e.id.is_empty())
        .collect();
    if expenses.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = expenses.iter().map(render_label).collect();
    let picked = prompter.select(prompt, &labels)?;

    Ok(picked.and_then(|index| expenses.into_iter().nth(index)))
}
