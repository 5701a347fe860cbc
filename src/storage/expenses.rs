//! Expense store backed by a single JSON array file
//!
//! Every operation is a full read-modify-write of the file. There is no
//! locking between processes: two invocations racing on the same file end
//! with whichever wrote last.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseFields, ExpenseId};

use super::file_io::{create_json_if_missing, read_json, write_json_atomic};

/// Durable CRUD over the expense list
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Open the store at `path`, creating an empty array file if absent
    pub fn open(path: impl Into<PathBuf>) -> TrackerResult<Self> {
        let path = path.into();
        if create_json_if_missing(&path, &Vec::<Expense>::new())? {
            info!(path = %path.display(), "initialized empty expense store");
        }
        Ok(Self { path })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record in file order
    ///
    /// A missing file is recreated empty. An unreadable or malformed file is a
    /// [`TrackerError::Read`], never an empty list.
    pub fn read_all(&self) -> TrackerResult<Vec<Expense>> {
        create_json_if_missing(&self.path, &Vec::<Expense>::new())?;
        let expenses: Vec<Expense> = read_json(&self.path)?;
        debug!(count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    /// Overwrite the file with `expenses`
    pub fn write(&self, expenses: &[Expense]) -> TrackerResult<()> {
        write_json_atomic(&self.path, &expenses)
    }

    /// Append a new record with a fresh id
    pub fn append(&self, fields: ExpenseFields) -> TrackerResult<Expense> {
        let mut expenses = self.read_all()?;

        let mut expense = Expense::new(fields);
        while expenses.iter().any(|e| e.id == expense.id) {
            expense.id = ExpenseId::new();
        }

        expenses.push(expense.clone());
        self.write(&expenses)?;

        info!(id = %expense.id, "added expense");
        Ok(expense)
    }

    /// Look up a single record
    pub fn get(&self, id: &ExpenseId) -> TrackerResult<Option<Expense>> {
        Ok(self.read_all()?.into_iter().find(|e| &e.id == id))
    }

    /// Replace the mutable fields of the record with `id`, in place
    pub fn update_by_id(&self, id: &ExpenseId, fields: ExpenseFields) -> TrackerResult<Expense> {
        let mut expenses = self.read_all()?;

        let expense = expenses
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| TrackerError::expense_not_found(id.as_str()))?;
        expense.apply(fields);
        let updated = expense.clone();

        self.write(&expenses)?;

        info!(id = %id, "updated expense");
        Ok(updated)
    }

    /// Drop the record with `id`; absent ids are ignored
    ///
    /// Returns whether a record was removed.
    pub fn remove_by_id(&self, id: &ExpenseId) -> TrackerResult<bool> {
        let mut expenses = self.read_all()?;
        let before = expenses.len();
        expenses.retain(|e| &e.id != id);
        let removed = expenses.len() != before;

        self.write(&expenses)?;

        if removed {
            info!(id = %id, "removed expense");
        } else {
            debug!(id = %id, "no expense to remove");
        }
        Ok(removed)
    }
}
