//! Expense table formatting
//!
//! Tables are built with `tabled`. Which columns appear is decided by the
//! caller: `list` flags or a `read` view mode.

use std::fmt;
use std::str::FromStr;

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::Expense;

/// Message shown instead of an empty table
pub const NO_EXPENSES: &str = "No expenses recorded yet.";

/// A column of the expense table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Description,
    Amount,
    Category,
    Date,
}

impl Column {
    fn header(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Date => "Date",
        }
    }

    fn cell(self, expense: &Expense) -> String {
        match self {
            Self::Id => expense.id.to_string(),
            Self::Description => expense.description.clone(),
            Self::Amount => expense.amount.clone(),
            Self::Category => expense.category.clone(),
            Self::Date => expense.date.clone(),
        }
    }
}

/// Columns for `list`: description always, the flagged ones after it, or
/// everything when nothing is flagged
pub fn list_columns(amount: bool, category: bool, date: bool) -> Vec<Column> {
    let all = !(amount || category || date);

    let mut columns = vec![Column::Description];
    if all || amount {
        columns.push(Column::Amount);
    }
    if all || category {
        columns.push(Column::Category);
    }
    if all || date {
        columns.push(Column::Date);
    }
    columns
}

/// Field selection offered by the `read` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Amount,
    Category,
    Date,
    Description,
    All,
}

impl ViewMode {
    /// Every mode, in the order shown to the user
    pub const ALL: [ViewMode; 5] = [
        ViewMode::Amount,
        ViewMode::Category,
        ViewMode::Date,
        ViewMode::Description,
        ViewMode::All,
    ];

    /// Columns rendered for this mode; the id always leads
    pub fn columns(self) -> Vec<Column> {
        match self {
            Self::Amount => vec![Column::Id, Column::Description, Column::Amount],
            Self::Category => vec![Column::Id, Column::Description, Column::Category],
            Self::Date => vec![Column::Id, Column::Description, Column::Date],
            Self::Description => vec![Column::Id, Column::Description],
            Self::All => vec![
                Column::Id,
                Column::Description,
                Column::Amount,
                Column::Category,
                Column::Date,
            ],
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Date => "date",
            Self::Description => "description",
            Self::All => "all",
        };
        f.write_str(name)
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown view mode '{}'", s))
    }
}

/// Render `expenses` as a table, or the empty notice
pub fn format_expense_table(expenses: &[Expense], columns: &[Column]) -> String {
    if expenses.is_empty() {
        return NO_EXPENSES.to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| c.header().to_string()));
    for expense in expenses {
        builder.push_record(columns.iter().map(|c| c.cell(expense)));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
