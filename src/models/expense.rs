//! Expense model
//!
//! Represents one expense transaction. Field validation happens at the
//! creation boundary ([`Expense::new`]): the store deliberately does not
//! re-validate rows it loads, so the date stays a plain string in memory.
//! Aggregations that need a calendar date parse it on demand and skip
//! values that do not parse.
//!
//! Expenses are immutable values. Edit flows build a replacement with the
//! `with_*` methods and splice it into the collection before resaving;
//! nothing mutates an expense in place.

use chrono::NaiveDate;
use std::fmt;

use super::money::Money;
use crate::error::{SpendlogError, SpendlogResult};

/// Date format used throughout the expense file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One expense transaction
///
/// Persistence is the CSV row written field-by-field by the store, so this
/// type carries no serde derives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Transaction date as "YYYY-MM-DD" text
    pub date: String,

    /// Expense category (case-sensitive, non-empty)
    pub category: String,

    /// Expense amount (positive)
    pub amount: Money,

    /// Free-form description
    pub description: String,
}

impl Expense {
    /// Create a validated expense
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the amount is not positive, the
    /// category is empty after trimming, or the date is not a valid
    /// "YYYY-MM-DD" calendar date.
    pub fn new(
        date: &str,
        category: &str,
        amount: Money,
        description: impl Into<String>,
    ) -> SpendlogResult<Self> {
        Ok(Self {
            date: validate_date(date)?,
            category: validate_category(category)?,
            amount: validate_amount(amount)?,
            description: description.into(),
        })
    }

    /// Assemble an expense from already-persisted fields, without validation
    ///
    /// Used by the store when loading: persisted rows are trusted as-is, and
    /// rows whose amount does not parse never reach this point.
    pub(crate) fn from_persisted(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Parse the stored date, if it is a valid calendar date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Derive the "YYYY-MM" month key, if the date parses
    pub fn month_key(&self) -> Option<String> {
        self.parsed_date().map(|d| d.format("%Y-%m").to_string())
    }

    /// Return a copy with a different (validated) amount
    pub fn with_amount(&self, amount: Money) -> SpendlogResult<Self> {
        Ok(Self {
            amount: validate_amount(amount)?,
            ..self.clone()
        })
    }

    /// Return a copy with a different (validated) category
    pub fn with_category(&self, category: &str) -> SpendlogResult<Self> {
        Ok(Self {
            category: validate_category(category)?,
            ..self.clone()
        })
    }

    /// Return a copy with a different (validated) date
    pub fn with_date(&self, date: &str) -> SpendlogResult<Self> {
        Ok(Self {
            date: validate_date(date)?,
            ..self.clone()
        })
    }

    /// Return a copy with a different description
    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}: {} - {}",
            self.date, self.category, self.amount, self.description
        )
    }
}

/// Validate that an amount is positive
pub fn validate_amount(amount: Money) -> SpendlogResult<Money> {
    if amount.is_positive() {
        Ok(amount)
    } else {
        Err(SpendlogError::Validation(
            "Amount must be greater than 0".into(),
        ))
    }
}

/// Validate a date string, normalizing it to "YYYY-MM-DD"
pub fn validate_date(date: &str) -> SpendlogResult<String> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| SpendlogError::Validation("Date must be in YYYY-MM-DD format".into()))
}

/// Validate a category, trimming surrounding whitespace
pub fn validate_category(category: &str) -> SpendlogResult<String> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        Err(SpendlogError::Validation("Category cannot be empty".into()))
    } else {
        Ok(trimmed.to_string())
    }
}
