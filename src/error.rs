//! Custom error types for the expense tracker
//!
//! Every failure a command can hit is one variant of [`TrackerError`]. Handlers
//! return [`TrackerResult`] and the binary reports the message to the user.

use std::path::Path;

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Data location could not be resolved
    #[error("Configuration error: {0}")]
    Config(String),

    /// The store file could not be read or parsed
    #[error("We couldn't read your expenses history: {0}")]
    Read(String),

    /// The store file could not be written; nothing was persisted
    #[error("Something unexpected happened while saving: {0}")]
    Write(String),

    /// User input failed a field check
    #[error("Validation error: {0}")]
    Validation(String),

    /// No record has the requested id
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The interactive prompt could not be shown or was interrupted
    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl TrackerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Read failure for the given path
    pub fn read(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Read(format!("{}: {}", path.display(), err))
    }

    /// Write failure for the given path
    pub fn write(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Write(format!("{}: {}", path.display(), err))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the store could not be read
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read(_))
    }
}

impl From<dialoguer::Error> for TrackerError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
