//! Budget alert model
//!
//! A budget is just a category → limit mapping (see `storage::budgets`);
//! this module holds the structured alert values produced when actual
//! spending is compared against those limits.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Percentage of the limit at which a warning alert fires
pub const WARNING_THRESHOLD: f64 = 80.0;

/// Percentage of the limit at which an exceeded alert fires
pub const EXCEEDED_THRESHOLD: f64 = 100.0;

/// Severity of a budget alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Spending is at 80-99% of the limit
    Warning,
    /// Spending has reached or passed the limit
    Exceeded,
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Warning"),
            Self::Exceeded => write!(f, "Exceeded"),
        }
    }
}

/// A threshold-crossing alert for one budgeted category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAlert {
    /// The budgeted category
    pub category: String,
    /// Actual spend in this category
    pub spent: Money,
    /// The configured limit
    pub limit: Money,
    /// Spend as a percentage of the limit (0 when the limit is zero)
    pub percentage: f64,
    /// Alert severity
    pub level: AlertLevel,
}

impl fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            AlertLevel::Exceeded => write!(
                f,
                "{}: budget exceeded ({}/{})",
                self.category, self.spent, self.limit
            ),
            AlertLevel::Warning => write!(
                f,
                "{}: {:.0}% of budget used ({}/{})",
                self.category, self.percentage, self.spent, self.limit
            ),
        }
    }
}
