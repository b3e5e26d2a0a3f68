//! Storage layer for spendlog
//!
//! The expense collection lives in a CSV file, budgets in a JSON file.
//! Both are reopened on every call; there is no handle caching, no locking,
//! and no protection against two processes racing on the same files. That
//! limitation is deliberate and documented, not something this layer hides.

pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use budgets::{BudgetLedger, BudgetMap};
pub use expenses::{ExpenseStore, LoadReport, SkipReason, SkippedRow, CSV_HEADER};
pub use file_io::{read_json, write_json_atomic};

use crate::config::SpendlogPaths;
use crate::error::SpendlogError;

/// Storage coordinator wiring the configured paths into each component
pub struct Storage {
    paths: SpendlogPaths,
    pub expenses: ExpenseStore,
    pub budgets: BudgetLedger,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// Ensures the directory tree exists and the expense file is ready.
    pub fn new(paths: SpendlogPaths) -> Result<Self, SpendlogError> {
        paths.ensure_directories()?;

        let expenses = ExpenseStore::new(paths.expenses_file());
        expenses.ensure_ready()?;

        Ok(Self {
            budgets: BudgetLedger::new(paths.budgets_file()),
            expenses,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SpendlogPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("backups").exists());
        assert!(storage.paths().expenses_file().exists());
        assert!(storage.expenses.load_all().unwrap().is_empty());
    }
}
