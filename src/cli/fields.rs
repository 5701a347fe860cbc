//! Expense options shared by `add` and `update`
//!
//! Flags that were not given are filled in by prompting, then the complete
//! set is validated in one go.

use clap::Args;

use crate::error::TrackerResult;
use crate::models::{Expense, ExpenseFields};

use super::prompt::Prompter;

pub const AMOUNT_PROMPT: &str = "How much did you spend?";
pub const DESCRIPTION_PROMPT: &str = "What was it for? (up to 50 characters)";
pub const CATEGORY_PROMPT: &str = "Which category fits the expense?";
pub const DATE_PROMPT: &str = "When did you spend it? (YYYY-MM-DD)";

/// Expense fields as given on the command line
#[derive(Debug, Clone, Default, Args)]
pub struct ExpenseArgs {
    /// Amount spent, e.g. 12 or 12.50
    #[arg(short = 'a', long)]
    pub amount: Option<String>,

    /// Short description (up to 50 characters)
    #[arg(short = 's', long)]
    pub description: Option<String>,

    /// Category, free text
    #[arg(short = 'c', long)]
    pub category: Option<String>,

    /// Date in YYYY-MM-DD format
    #[arg(short = 't', long)]
    pub date: Option<String>,
}

impl ExpenseArgs {
    /// Prompt for every missing field, then validate
    ///
    /// With `current`, its values are offered as prompt defaults.
    pub fn resolve(
        self,
        prompter: &mut dyn Prompter,
        current: Option<&Expense>,
    ) -> TrackerResult<ExpenseFields> {
        let amount = fill(self.amount, prompter, AMOUNT_PROMPT, current.map(|e| e.amount.as_str()))?;
        let description = fill(
            self.description,
            prompter,
            DESCRIPTION_PROMPT,
            current.map(|e| e.description.as_str()),
        )?;
        let category = fill(
            self.category,
            prompter,
            CATEGORY_PROMPT,
            current.map(|e| e.category.as_str()),
        )?;
        let date = fill(self.date, prompter, DATE_PROMPT, current.map(|e| e.date.as_str()))?;

        ExpenseFields::parse(&amount, &description, &category, &date)
    }
}

fn fill(
    given: Option<String>,
    prompter: &mut dyn Prompter,
    prompt: &str,
    default: Option<&str>,
) -> TrackerResult<String> {
    match given {
        Some(value) => Ok(value),
        None => prompter.input(prompt, default.filter(|d| !d.is_empty())),
    }
}
