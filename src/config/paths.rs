//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. An explicit file (`--file` or `EXP_FILE`)
//! 2. `EXP_DATA_DIR` environment variable (directory holding `expenses.json`)
//! 3. The platform data directory (e.g. `~/.local/share/expense-tracker`)

use std::fmt;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "EXP_DATA_DIR";

/// File name used inside a data directory
pub const STORE_FILE_NAME: &str = "expenses.json";

/// Where the store path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    Explicit,
    Environment,
    PlatformDefault,
}

impl fmt::Display for PathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => write!(f, "--file / EXP_FILE"),
            Self::Environment => write!(f, "{}", DATA_DIR_ENV),
            Self::PlatformDefault => write!(f, "platform data directory"),
        }
    }
}

/// Resolved location of the expense store
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    store_file: PathBuf,
    source: PathSource,
}

impl TrackerPaths {
    /// Resolve the store location
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit path is given and the platform data
    /// directory cannot be determined.
    pub fn resolve(explicit_file: Option<PathBuf>) -> Result<Self, TrackerError> {
        if let Some(file) = explicit_file {
            return Ok(Self::with_store_file(file));
        }

        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self {
                store_file: PathBuf::from(dir).join(STORE_FILE_NAME),
                source: PathSource::Environment,
            });
        }

        let dirs = ProjectDirs::from("", "", "expense-tracker").ok_or_else(|| {
            TrackerError::Config("Could not determine a home directory for the data file".into())
        })?;

        Ok(Self {
            store_file: dirs.data_dir().join(STORE_FILE_NAME),
            source: PathSource::PlatformDefault,
        })
    }

    /// Use a fixed store file (useful for testing)
    pub fn with_store_file(store_file: PathBuf) -> Self {
        Self {
            store_file,
            source: PathSource::Explicit,
        }
    }

    /// Path to the JSON store file
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    pub fn source(&self) -> PathSource {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_file_wins() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("mine.json");

        let paths = TrackerPaths::resolve(Some(file.clone())).unwrap();
        assert_eq!(paths.store_file(), file);
        assert_eq!(paths.source(), PathSource::Explicit);
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(DATA_DIR_ENV, temp_dir.path());
        let paths = TrackerPaths::resolve(None).unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.store_file(), temp_dir.path().join(STORE_FILE_NAME));
        assert_eq!(paths.source(), PathSource::Environment);
    }

    #[test]
    fn test_source_display() {
        assert_eq!(PathSource::Explicit.to_string(), "--file / EXP_FILE");
        assert_eq!(PathSource::Environment.to_string(), "EXP_DATA_DIR");
    }
}
