//! Expense store
//!
//! Persists the full expense collection as an ordered, header-tagged CSV
//! file. Every operation reopens the file; nothing is cached between calls.
//!
//! Loading is tolerant: a malformed row never blocks the rest of the file.
//! Instead of swallowing rows invisibly, [`ExpenseStore::load_report`]
//! returns a ledger of which lines were skipped and why, so callers and
//! tests can account for every dropped row.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::SpendlogResult;
use crate::models::{Expense, Money};

/// Header row of the expense file
pub const CSV_HEADER: [&str; 4] = ["Date", "Category", "Amount", "Description"];

/// Why a row was dropped during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Every field was blank after trimming
    Blank,
    /// The row has fewer fields than the format requires
    MissingFields,
    /// The amount field did not parse as a decimal
    BadAmount(String),
    /// The CSV layer could not decode the row
    Unreadable(String),
}

/// One row dropped during load, with its 1-based file line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: SkipReason,
}

/// Result of a full load: the expenses that parsed, plus the skip ledger
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Parsed expenses in file order
    pub expenses: Vec<Expense>,
    /// Rows that were dropped, in file order
    pub skipped: Vec<SkippedRow>,
}

/// File-backed store for the expense collection
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store over the given CSV file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Guarantee the backing file and its parent directory exist
    ///
    /// If the file is absent it is created with only the header row.
    /// Idempotent; safe to call before every operation.
    pub fn ensure_ready(&self) -> SpendlogResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if !self.path.exists() {
            let mut writer = WriterBuilder::new().from_path(&self.path)?;
            writer.write_record(CSV_HEADER)?;
            writer.flush()?;
        }

        Ok(())
    }

    /// Load all expenses, discarding the skip ledger
    pub fn load_all(&self) -> SpendlogResult<Vec<Expense>> {
        Ok(self.load_report()?.expenses)
    }

    /// Load all expenses along with a ledger of skipped rows
    ///
    /// Rows are returned in file order. Blank rows, rows with missing
    /// fields, and rows whose amount does not parse are skipped, never
    /// raised as errors.
    pub fn load_report(&self) -> SpendlogResult<LoadReport> {
        self.ensure_ready()?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let mut report = LoadReport::default();

        // Line 1 is the header, so data rows start at line 2
        for (idx, result) in reader.records().enumerate() {
            let line = idx + 2;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    report.skipped.push(SkippedRow {
                        line,
                        reason: SkipReason::Unreadable(e.to_string()),
                    });
                    continue;
                }
            };

            match parse_row(&record) {
                Ok(expense) => report.expenses.push(expense),
                Err(reason) => report.skipped.push(SkippedRow { line, reason }),
            }
        }

        Ok(report)
    }

    /// Overwrite the file with the header plus one row per expense
    ///
    /// Order is preserved. The rewrite is deliberately not atomic: a crash
    /// between truncation and write loses the file contents. This is a
    /// documented limitation of the format, not a bug to fix here.
    pub fn save_all(&self, expenses: &[Expense]) -> SpendlogResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = WriterBuilder::new().from_path(&self.path)?;
        writer.write_record(CSV_HEADER)?;
        for expense in expenses {
            writer.write_record(expense_row(expense))?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Append one expense row to the file
    ///
    /// No duplicate detection; the caller decides what goes in.
    pub fn append(&self, expense: &Expense) -> SpendlogResult<()> {
        self.ensure_ready()?;

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(expense_row(expense))?;
        writer.flush()?;

        Ok(())
    }
}

/// Encode an expense as its four ordered CSV fields
fn expense_row(expense: &Expense) -> [String; 4] {
    [
        expense.date.clone(),
        expense.category.clone(),
        expense.amount.to_string(),
        expense.description.clone(),
    ]
}

/// Parse one data row, mapping each failure mode to its skip reason
fn parse_row(record: &StringRecord) -> Result<Expense, SkipReason> {
    if record.iter().all(|field| field.trim().is_empty()) {
        return Err(SkipReason::Blank);
    }

    if record.len() < 3 {
        return Err(SkipReason::MissingFields);
    }

    let amount = Money::parse(&record[2]).map_err(|_| SkipReason::BadAmount(record[2].into()))?;

    Ok(Expense::from_persisted(
        &record[0],
        &record[1],
        amount,
        record.get(3).unwrap_or(""),
    ))
}
