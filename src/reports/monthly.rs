//! Monthly report
//!
//! Filters expenses to a single "YYYY-MM" month and produces the report
//! artifact: the filtered rows plus trailing Total/Average summary rows.
//!
//! The month key is calendar-validated and must be exactly seven
//! characters, so the prefix match below can never bleed into other
//! months (a loose key like "2025-1" is rejected rather than matching
//! "2025-10" through "2025-12").

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::Writer;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Expense, Money};
use crate::storage::expenses::CSV_HEADER;

use super::summary::total_and_average;

/// A month's worth of expenses with their total and average
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// The "YYYY-MM" month key
    pub month: String,
    /// Expenses in the month, in collection order
    pub rows: Vec<Expense>,
    /// Sum of the month's amounts
    pub total: Money,
    /// Average of the month's amounts (zero for an empty month)
    pub average: Money,
}

/// Build the report for one month
///
/// # Errors
///
/// `Validation` if `month` is not a "YYYY-MM" calendar month.
pub fn monthly_report(expenses: &[Expense], month: &str) -> SpendlogResult<MonthlyReport> {
    let month = validate_month(month)?;

    let rows: Vec<Expense> = expenses
        .iter()
        .filter(|e| e.date.starts_with(&month))
        .cloned()
        .collect();
    let (total, average) = total_and_average(&rows);

    Ok(MonthlyReport {
        month,
        rows,
        total,
        average,
    })
}

impl MonthlyReport {
    /// Write the report artifact: header, rows, blank row, Total, Average
    pub fn write_csv<W: Write>(&self, writer: W) -> SpendlogResult<()> {
        let mut csv = Writer::from_writer(writer);

        csv.write_record(CSV_HEADER)?;
        for expense in &self.rows {
            csv.write_record([
                expense.date.as_str(),
                expense.category.as_str(),
                &expense.amount.to_string(),
                expense.description.as_str(),
            ])?;
        }

        // The summary rows are shorter than the header, so they go through
        // the raw writer; none of the values need CSV escaping.
        let mut writer = csv
            .into_inner()
            .map_err(|e| SpendlogError::Report(format!("Failed to flush report rows: {}", e)))?;
        writeln!(writer)?;
        writeln!(writer, "Total,{}", self.total)?;
        writeln!(writer, "Average,{}", self.average)?;
        writer.flush()?;

        Ok(())
    }

    /// Save the artifact as `report_<YYYY-MM>.csv` in the given directory
    ///
    /// Returns the path of the written file.
    pub fn save(&self, dir: &Path) -> SpendlogResult<PathBuf> {
        std::fs::create_dir_all(dir)?;

        let path = dir.join(format!("report_{}.csv", self.month));
        let file = File::create(&path)
            .map_err(|e| SpendlogError::Report(format!("Failed to create report file: {}", e)))?;
        self.write_csv(BufWriter::new(file))?;

        Ok(path)
    }
}

/// Validate a "YYYY-MM" month key
fn validate_month(month: &str) -> SpendlogResult<String> {
    let month = month.trim();
    let valid = month.len() == 7
        && NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").is_ok();

    if valid {
        Ok(month.to_string())
    } else {
        Err(SpendlogError::Validation(
            "Month must be in YYYY-MM format".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(date: &str, category: &str, cents: i64, description: &str) -> Expense {
        Expense::new(date, category, Money::from_cents(cents), description).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("2025-12-01", "Food", 40_000, "groceries"),
            expense("2025-12-02", "Food", 60_000, "dinner"),
            expense("2025-11-30", "Transport", 10_000, "taxi"),
        ]
    }

    #[test]
    fn test_filters_to_exact_month() {
        let report = monthly_report(&sample(), "2025-12").unwrap();

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.total, Money::from_cents(100_000));
        assert_eq!(report.average, Money::from_cents(50_000));
    }

    #[test]
    fn test_empty_month() {
        let report = monthly_report(&sample(), "2024-01").unwrap();

        assert!(report.rows.is_empty());
        assert_eq!(report.total, Money::zero());
        assert_eq!(report.average, Money::zero());
    }

    #[test]
    fn test_loose_month_key_is_rejected() {
        // "2025-1" would lexically match 2025-10 through 2025-12; the key
        // must be the exact seven-character form instead.
        assert!(monthly_report(&sample(), "2025-1").unwrap_err().is_validation());
        assert!(monthly_report(&sample(), "2025-13").unwrap_err().is_validation());
        assert!(monthly_report(&sample(), "garbage").unwrap_err().is_validation());
        assert!(monthly_report(&sample(), "2025-12-01").unwrap_err().is_validation());
    }

    #[test]
    fn test_write_csv_artifact() {
        let report = monthly_report(&sample(), "2025-12").unwrap();

        let mut out = Vec::new();
        report.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Date,Category,Amount,Description");
        assert_eq!(lines[1], "2025-12-01,Food,400.00,groceries");
        assert_eq!(lines[2], "2025-12-02,Food,600.00,dinner");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Total,1000.00");
        assert_eq!(lines[5], "Average,500.00");
    }

    #[test]
    fn test_save_names_file_after_month() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let report = monthly_report(&sample(), "2025-12").unwrap();

        let path = report.save(temp_dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), "report_2025-12.csv");
        assert!(path.exists());
    }
}
