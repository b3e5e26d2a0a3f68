//! Budget ledger
//!
//! Persists per-category spending limits as a single pretty-printed JSON
//! object and compares actual spending against them. Limits are keyed by
//! exact category name; one limit per category.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::expense::validate_category;
use crate::models::{
    AlertLevel, BudgetAlert, Expense, Money, EXCEEDED_THRESHOLD, WARNING_THRESHOLD,
};
use crate::reports::summary::category_summary;

use super::file_io::{read_json, write_json_atomic};

/// Category name → spending limit
pub type BudgetMap = BTreeMap<String, Money>;

/// File-backed ledger of per-category budget limits
pub struct BudgetLedger {
    path: PathBuf,
}

impl BudgetLedger {
    /// Create a ledger over the given JSON file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all budget limits
    ///
    /// Returns an empty map when no budgets have been saved yet; a missing
    /// file is not an error.
    pub fn load(&self) -> SpendlogResult<BudgetMap> {
        read_json(&self.path)
    }

    /// Save the full budget map (atomic write)
    pub fn save(&self, budgets: &BudgetMap) -> SpendlogResult<()> {
        write_json_atomic(&self.path, budgets)
    }

    /// Set or update the limit for a category
    ///
    /// The amount is parsed from decimal text. Returns the stored limit.
    ///
    /// # Errors
    ///
    /// `Validation` if the category is empty, the amount is not numeric, or
    /// the amount is negative.
    pub fn set(&self, category: &str, amount: &str) -> SpendlogResult<Money> {
        let category = validate_category(category)?;
        let limit = Money::parse(amount)?;
        if limit.is_negative() {
            return Err(SpendlogError::Validation(
                "Budget limit cannot be negative".into(),
            ));
        }

        let mut budgets = self.load()?;
        budgets.insert(category, limit);
        self.save(&budgets)?;

        Ok(limit)
    }

    /// Remove the limit for a category
    ///
    /// Returns whether an entry was removed; a missing entry is not an error.
    pub fn delete(&self, category: &str) -> SpendlogResult<bool> {
        let mut budgets = self.load()?;
        let removed = budgets.remove(category).is_some();
        if removed {
            self.save(&budgets)?;
        }
        Ok(removed)
    }

    /// Compare actual spending against every budgeted category
    ///
    /// Emits an `Exceeded` alert at >= 100% of the limit and a `Warning`
    /// alert at 80-99%. Categories without a budget entry never alert.
    /// Alerts follow the map's sorted order; callers must not rely on it.
    pub fn alerts(&self, expenses: &[Expense]) -> SpendlogResult<Vec<BudgetAlert>> {
        let budgets = self.load()?;
        let spend = category_summary(expenses);

        let mut alerts = Vec::new();
        for (category, limit) in &budgets {
            let spent = spend.get(category).copied().unwrap_or_else(Money::zero);

            let percentage = if limit.cents() > 0 {
                spent.cents() as f64 / limit.cents() as f64 * 100.0
            } else {
                0.0
            };

            let level = if percentage >= EXCEEDED_THRESHOLD {
                AlertLevel::Exceeded
            } else if percentage >= WARNING_THRESHOLD {
                AlertLevel::Warning
            } else {
                continue;
            };

            alerts.push(BudgetAlert {
                category: category.clone(),
                spent,
                limit: *limit,
                percentage,
                level,
            });
        }

        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ledger_in(temp_dir: &TempDir) -> BudgetLedger {
        BudgetLedger::new(temp_dir.path().join("data").join("budgets.json"))
    }

    fn expense(date: &str, category: &str, cents: i64) -> Expense {
        Expense::new(date, category, Money::from_cents(cents), "").unwrap()
    }

    #[test]
    fn test_load_without_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ledger_in(&temp_dir);

        assert!(ledger.load().unwrap().is_empty());
    }

    #[test]
    fn test_set_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ledger_in(&temp_dir);

        assert_eq!(
            ledger.set("Food", "1000.00").unwrap(),
            Money::from_cents(100_000)
        );

        let budgets = ledger.load().unwrap();
        assert_eq!(budgets.get("Food"), Some(&Money::from_cents(100_000)));
    }

    #[test]
    fn test_set_upserts() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ledger_in(&temp_dir);

        ledger.set("Food", "1000").unwrap();
        ledger.set("Food", "500").unwrap();

        let budgets = ledger.load().unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets.get("Food"), Some(&Money::from_cents(50_000)));
    }

    #[test]
    fn test_set_rejects_invalid_input() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ledger_in(&temp_dir);

        assert!(ledger.set("Food", "abc").unwrap_err().is_validation());
        assert!(ledger.set("Food", "-10").unwrap_err().is_validation());
        assert!(ledger.set("  ", "10").unwrap_err().is_validation());
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ledger_in(&temp_dir);

        ledger.set("Food", "1000").unwrap();
        assert!(ledger.delete("Food").unwrap());
        assert!(ledger.load().unwrap().is_empty());

        // Absent category is a no-op, not an error
        assert!(!ledger.delete("Food").unwrap());
    }

    #[test]
    fn test_alerts_exceeded_at_limit() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ledger_in(&temp_dir);
        ledger.set("Food", "1000").unwrap();

        let expenses = vec![
            expense("2025-12-01", "Food", 40_000),
            expense("2025-12-02", "Food", 60_000),
        ];

        let alerts = ledger.alerts(&expenses).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].category, "Food");
        assert_eq!(alerts[0].level, AlertLevel::Exceeded);
        assert_eq!(alerts[0].percentage, 100.0);
    }

    #[test]
    fn test_alerts_warning_band() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ledger_in(&temp_dir);
        ledger.set("Food", "1000").unwrap();

        let alerts = ledger
            .alerts(&[expense("2025-12-01", "Food", 85_000)])
            .unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Warning);
        assert_eq!(alerts[0].percentage, 85.0);
    }

    #[test]
    fn test_no_alert_below_warning_threshold() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ledger_in(&temp_dir);
        ledger.set("Food", "1000").unwrap();

        let alerts = ledger
            .alerts(&[expense("2025-12-01", "Food", 50_000)])
            .unwrap();
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_unbudgeted_category_never_alerts() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ledger_in(&temp_dir);
        ledger.set("Food", "1000").unwrap();

        let alerts = ledger
            .alerts(&[expense("2025-12-01", "Transport", 999_900)])
            .unwrap();
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_zero_limit_never_divides() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ledger_in(&temp_dir);
        ledger.set("Food", "0").unwrap();

        let alerts = ledger
            .alerts(&[expense("2025-12-01", "Food", 10_000)])
            .unwrap();
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_worked_example() {
        // Records (400 Food, 600 Food, 100 Transport) against
        // budgets {Food: 1000, Transport: 200}
        let temp_dir = TempDir::new().unwrap();
        let ledger = ledger_in(&temp_dir);
        ledger.set("Food", "1000").unwrap();
        ledger.set("Transport", "200").unwrap();

        let expenses = vec![
            expense("2025-12-01", "Food", 40_000),
            expense("2025-12-02", "Food", 60_000),
            expense("2025-12-01", "Transport", 10_000),
        ];

        let summary = category_summary(&expenses);
        assert_eq!(summary.get("Food"), Some(&Money::from_cents(100_000)));
        assert_eq!(summary.get("Transport"), Some(&Money::from_cents(10_000)));

        let alerts = ledger.alerts(&expenses).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].category, "Food");
        assert_eq!(alerts[0].level, AlertLevel::Exceeded);
    }

    #[test]
    fn test_budget_file_is_pretty_printed_object() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = ledger_in(&temp_dir);
        ledger.set("Food", "1000").unwrap();

        let contents = std::fs::read_to_string(ledger.path()).unwrap();
        assert!(contents.starts_with('{'));
        assert!(contents.contains("\"Food\": 100000"));
    }
}
